use std::collections::HashMap;

use log::debug;
use log::info;

use crate::config::SeriesTable;
use crate::digest::SeriesGroup;
use crate::digest::SeriesGroups;
use crate::feed::model::Chapter;

/// Groups a flat chapter list by owning series.
///
/// A chapter's owner is the id of its first relationship of type `manga`;
/// chapters without one cannot be grouped and are dropped. The result follows
/// the table's order and only ever contains configured series; chapters within
/// a group keep their fetched order.
pub fn group_by_series(chapters: Vec<Chapter>, table: &SeriesTable) -> SeriesGroups {
    let mut by_id: HashMap<String, Vec<Chapter>> = HashMap::new();
    let mut orphaned = 0usize;

    for chapter in chapters {
        let series_id = chapter.series_id().map(str::to_string);
        match series_id {
            Some(id) => by_id.entry(id).or_default().push(chapter),
            None => orphaned += 1,
        }
    }

    if orphaned > 0 {
        debug!("Dropped {orphaned} chapters with no manga relationship");
    }

    let mut result = SeriesGroups::default();
    for entry in table.iter() {
        match by_id.remove(&entry.id) {
            Some(chapters) => result.groups.push(SeriesGroup {
                name: entry.name.clone(),
                chapters,
            }),
            None => result.no_updates.push(entry.name.clone()),
        }
    }

    if !result.no_updates.is_empty() {
        info!("Did not find updates for: {}", result.no_updates.join(", "));
    }

    result
}
