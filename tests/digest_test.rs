//! End-to-end grouping and sorting properties over in-memory chapter lists.

use mdx_digest::config::SeriesEntry;
use mdx_digest::config::SeriesTable;
use mdx_digest::digest::format::sort_chapters;
use mdx_digest::digest::group::group_by_series;
use mdx_digest::feed::model::Chapter;
use mdx_digest::feed::model::ChapterAttributes;
use mdx_digest::feed::model::Relationship;

fn table(entries: &[(&str, &str)]) -> SeriesTable {
    SeriesTable::from_entries(
        entries
            .iter()
            .map(|(id, name)| SeriesEntry {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    )
}

fn chapter(series_id: Option<&str>, number: Option<&str>) -> Chapter {
    Chapter {
        id: format!("ch-{}", number.unwrap_or("none")),
        attributes: ChapterAttributes {
            chapter: number.map(str::to_string),
            ..ChapterAttributes::default()
        },
        relationships: series_id
            .map(|id| {
                vec![Relationship {
                    kind: "manga".to_string(),
                    id: id.to_string(),
                }]
            })
            .unwrap_or_default(),
    }
}

#[test]
fn matched_series_are_grouped_and_unmatched_are_reported() {
    let table = table(&[("series-a", "Series A"), ("series-b", "Series B")]);
    let chapters = vec![
        chapter(Some("series-a"), Some("1")),
        chapter(Some("series-a"), Some("2")),
        chapter(Some("series-a"), Some("10")),
    ];

    let mut groups = group_by_series(chapters, &table);

    assert_eq!(groups.groups.len(), 1);
    assert_eq!(groups.no_updates, vec!["Series B".to_string()]);

    let group = &mut groups.groups[0];
    assert_eq!(group.name, "Series A");

    sort_chapters(&mut group.chapters);
    let numbers: Vec<_> = group
        .chapters
        .iter()
        .map(|c| c.attributes.chapter.as_deref().unwrap())
        .collect();
    assert_eq!(numbers, ["10", "2", "1"]);
}

#[test]
fn output_never_contains_unconfigured_series() {
    let table = table(&[("series-a", "Series A")]);
    let chapters = vec![
        chapter(Some("series-a"), Some("1")),
        chapter(Some("unknown-series"), Some("99")),
    ];

    let groups = group_by_series(chapters, &table);

    assert_eq!(groups.groups.len(), 1);
    assert_eq!(groups.groups[0].name, "Series A");
    assert_eq!(groups.groups[0].chapters.len(), 1);
    assert!(groups.no_updates.is_empty());
}

#[test]
fn chapter_without_manga_relationship_is_excluded_everywhere() {
    let table = table(&[("series-a", "Series A")]);
    let mut orphan = chapter(None, Some("5"));
    orphan.relationships = vec![Relationship {
        kind: "scanlation_group".to_string(),
        id: "series-a".to_string(),
    }];

    let groups = group_by_series(vec![orphan], &table);

    assert!(groups.groups.is_empty());
    assert_eq!(groups.no_updates, vec!["Series A".to_string()]);
}

#[test]
fn group_order_follows_the_table_not_the_chapters() {
    let table = table(&[("series-a", "Series A"), ("series-b", "Series B")]);
    let chapters = vec![
        chapter(Some("series-b"), Some("7")),
        chapter(Some("series-a"), Some("3")),
    ];

    let groups = group_by_series(chapters, &table);

    let names: Vec<_> = groups.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Series A", "Series B"]);
}

#[test]
fn chapters_within_a_group_keep_fetched_order_until_sorted() {
    let table = table(&[("series-a", "Series A")]);
    let chapters = vec![
        chapter(Some("series-a"), Some("2")),
        chapter(Some("series-a"), Some("10")),
    ];

    let groups = group_by_series(chapters, &table);
    let numbers: Vec<_> = groups.groups[0]
        .chapters
        .iter()
        .map(|c| c.attributes.chapter.as_deref().unwrap())
        .collect();
    assert_eq!(numbers, ["2", "10"]);
}
