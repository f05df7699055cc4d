//! Chapter ordering and display-field derivation.

use chrono::DateTime;

use crate::feed::model::Chapter;

/// Titles longer than this are truncated for fixed-width text output.
const TITLE_DISPLAY_MAX: usize = 35;
const TITLE_TRUNCATED_LEN: usize = 33;

/// Display fields for one chapter row in a fixed-width text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterLine {
    pub number: String,
    pub title: String,
    pub published: String,
    pub url: String,
}

/// Sorts chapters by numeric chapter number, highest first.
///
/// The sort is stable, so ties keep their fetched order, which is
/// publish-time descending. Unparseable numbers sort as 0.
pub fn sort_chapters(chapters: &mut [Chapter]) {
    chapters.sort_by(|a, b| b.number_key().total_cmp(&a.number_key()));
}

/// Renders `publishAt` as `MM/DD HH:MM` (24-hour clock).
///
/// A trailing `Z` is rewritten to `+00:00` before parsing. Anything
/// unparseable falls back to the first ten characters of the raw string, the
/// naive date-only slice of a well-formed timestamp.
pub fn format_publish_date(raw: &str) -> String {
    let normalized = match raw.strip_suffix('Z') {
        Some(prefix) => format!("{prefix}+00:00"),
        None => raw.to_string(),
    };

    match DateTime::parse_from_rfc3339(&normalized) {
        Ok(parsed) => parsed.format("%m/%d %H:%M").to_string(),
        Err(_) => raw.chars().take(10).collect(),
    }
}

/// Truncates a title for fixed-width rendering; structured output carries the
/// full title instead.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_DISPLAY_MAX {
        let mut truncated: String = title.chars().take(TITLE_TRUNCATED_LEN).collect();
        truncated.push_str("..");
        truncated
    } else {
        title.to_string()
    }
}

/// Derives the text-report fields for one chapter.
pub fn chapter_line(chapter: &Chapter) -> ChapterLine {
    ChapterLine {
        number: chapter
            .attributes
            .chapter
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        title: truncate_title(chapter.attributes.title.as_deref().unwrap_or("No Title")),
        published: format_publish_date(&chapter.attributes.publish_at),
        url: chapter.attributes.external_url.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::model::ChapterAttributes;

    fn chapter_numbered(id: &str, number: Option<&str>) -> Chapter {
        Chapter {
            id: id.to_string(),
            attributes: ChapterAttributes {
                chapter: number.map(str::to_string),
                ..ChapterAttributes::default()
            },
            ..Chapter::default()
        }
    }

    #[test]
    fn sorts_descending_with_zero_ties_in_original_order() {
        let mut chapters = vec![
            chapter_numbered("a", Some("10")),
            chapter_numbered("b", Some("")),
            chapter_numbered("c", None),
            chapter_numbered("d", Some("abc")),
            chapter_numbered("e", Some("3.5")),
        ];

        sort_chapters(&mut chapters);

        let order: Vec<&str> = chapters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["a", "e", "b", "c", "d"]);
    }

    #[test]
    fn formats_utc_timestamp_as_month_day_time() {
        assert_eq!(format_publish_date("2024-03-05T14:30:00Z"), "03/05 14:30");
    }

    #[test]
    fn formats_offset_timestamp_in_its_own_offset() {
        assert_eq!(
            format_publish_date("2024-12-31T23:59:00+09:00"),
            "12/31 23:59"
        );
    }

    #[test]
    fn unparseable_date_falls_back_to_leading_slice() {
        assert_eq!(format_publish_date("not-a-date"), "not-a-date");
        assert_eq!(
            format_publish_date("2024-03-05 14:30 (approx)"),
            "2024-03-05"
        );
        assert_eq!(format_publish_date(""), "");
    }

    #[test]
    fn long_titles_are_cut_with_an_ellipsis_marker() {
        let long = "This title is much too long for one table column";
        let truncated = truncate_title(long);

        assert_eq!(truncated.chars().count(), 35);
        assert!(truncated.ends_with(".."));
        assert_eq!(truncate_title("Short"), "Short");

        let exactly_35 = "a".repeat(35);
        assert_eq!(truncate_title(&exactly_35), exactly_35);
    }

    #[test]
    fn chapter_line_substitutes_display_defaults() {
        let chapter = Chapter::default();
        let line = chapter_line(&chapter);

        assert_eq!(line.number, "N/A");
        assert_eq!(line.title, "No Title");
        assert_eq!(line.url, "");
    }
}
