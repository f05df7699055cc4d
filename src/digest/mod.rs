//! Grouping and display formatting for fetched chapters.

pub mod format;
pub mod group;

use crate::feed::model::Chapter;

/// One configured series with its in-window chapters.
#[derive(Debug, Clone)]
pub struct SeriesGroup {
    pub name: String,
    pub chapters: Vec<Chapter>,
}

/// Grouping result: matched series in table order, plus the display names of
/// configured series that had no in-window chapters (diagnostics only, not
/// part of the digest proper).
#[derive(Debug, Default)]
pub struct SeriesGroups {
    pub groups: Vec<SeriesGroup>,
    pub no_updates: Vec<String>,
}
