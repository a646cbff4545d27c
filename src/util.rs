//! Utility functions for quillpost

use chrono::NaiveDate;

/// Formats a publish date as "January 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats the distance between a publish date and today
///
/// Converts the day difference to strings like "3 days ago" or
/// "2 months ago". Dates in the future are treated as today.
///
/// # Arguments
///
/// * `date`: Publish date
/// * `today`: Reference date
///
/// # Returns
///
/// Human readable relative date string
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days().max(0);

    if days == 0 {
        "today".to_string()
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 5)), "January 5, 2024");
        assert_eq!(format_date(date(2023, 12, 25)), "December 25, 2023");
    }

    #[test]
    fn test_format_relative_date_today() {
        let today = date(2024, 6, 1);
        assert_eq!(format_relative_date(today, today), "today");
    }

    #[test]
    fn test_format_relative_date_future_is_today() {
        assert_eq!(format_relative_date(date(2024, 6, 5), date(2024, 6, 1)), "today");
    }

    #[test]
    fn test_format_relative_date_ranges() {
        let today = date(2024, 6, 30);
        assert_eq!(format_relative_date(date(2024, 6, 29), today), "yesterday");
        assert_eq!(format_relative_date(date(2024, 6, 27), today), "3 days ago");
        assert_eq!(format_relative_date(date(2024, 6, 16), today), "2 weeks ago");
        assert_eq!(format_relative_date(date(2024, 3, 2), today), "4 months ago");
        assert_eq!(format_relative_date(date(2021, 6, 1), today), "3 years ago");
    }
}
