//! Shared utility functions used across multiple modules.

use chrono::NaiveDate;

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Short display date stored on a note, e.g. `16 Oct 2026`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Long date shown above the editor, e.g. `Friday 16 October 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A %-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" /tmp/notes ".to_string())),
            Some("/tmp/notes".to_string())
        );
    }

    #[test]
    fn display_dates_use_day_month_year_order() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_display_date(date), "5 Mar 2026");
        assert_eq!(format_long_date(date), "Thursday 5 March 2026");
    }
}
