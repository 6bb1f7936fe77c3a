/// Utilities for period dropdowns and Thai date formatting
///
/// Keeps the quarter/year/month option lists and display formats consistent
/// across the report pages.
use chrono::{Datelike, NaiveDate};
use contracts::reports::filter::quarter_of_month;

/// Thai month names, January first.
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// One entry of the quarter dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterOption {
    pub label: String,
    pub year: i32,
    pub quarter: u32,
}

/// Current quarter plus the three before it, newest first.
/// Rolls over year boundaries, e.g. Q1/2025 is followed by Q4/2024.
pub fn quarter_options(today: NaiveDate) -> Vec<QuarterOption> {
    let mut options = Vec::with_capacity(4);
    let mut year = today.year();
    let mut quarter = quarter_of_month(today.month());
    for i in 0..4 {
        let label = if i == 0 {
            format!("Q{}/{} (Current)", quarter, year)
        } else {
            format!("Q{}/{}", quarter, year)
        };
        options.push(QuarterOption {
            label,
            year,
            quarter,
        });
        if quarter == 1 {
            quarter = 4;
            year -= 1;
        } else {
            quarter -= 1;
        }
    }
    options
}

/// Current year plus the four before it, newest first.
pub fn year_options(today: NaiveDate) -> Vec<i32> {
    (0..5).map(|i| today.year() - i).collect()
}

/// `(month number, Thai name)` pairs for the month dropdown.
pub fn month_options() -> Vec<(u32, &'static str)> {
    THAI_MONTHS
        .iter()
        .enumerate()
        .map(|(i, name)| (i as u32 + 1, *name))
        .collect()
}

/// Format an ISO date string as Thai `d/m/yyyy` with a Buddhist-era year.
/// Example: "2024-03-15T14:02:26Z" -> "15/3/2567". Unparseable input is
/// passed through unchanged.
pub fn thai_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next().and_then(|p| p.parse::<i32>().ok());
    let month = parts.next().and_then(|p| p.parse::<u32>().ok());
    let day = parts.next().and_then(|p| p.parse::<u32>().ok());
    match (year, month, day) {
        (Some(year), Some(month), Some(day)) if (1..=12).contains(&month) => {
            format!("{}/{}/{}", day, month, year + 543)
        }
        _ => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_quarter_options_mid_year() {
        let options = quarter_options(date(2025, 8, 23));
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Q3/2025 (Current)", "Q2/2025", "Q1/2025", "Q4/2024"]
        );
        assert_eq!(options[3].year, 2024);
        assert_eq!(options[3].quarter, 4);
    }

    #[test]
    fn test_quarter_options_roll_over_year() {
        let options = quarter_options(date(2025, 2, 1));
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Q1/2025 (Current)", "Q4/2024", "Q3/2024", "Q2/2024"]
        );
    }

    #[test]
    fn test_year_options_count_backwards() {
        assert_eq!(
            year_options(date(2025, 8, 23)),
            vec![2025, 2024, 2023, 2022, 2021]
        );
    }

    #[test]
    fn test_month_options_are_one_indexed() {
        let months = month_options();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (1, "มกราคม"));
        assert_eq!(months[11], (12, "ธันวาคม"));
    }

    #[test]
    fn test_thai_date_uses_buddhist_era() {
        assert_eq!(thai_date("2024-03-15"), "15/3/2567");
        assert_eq!(thai_date("2024-03-15T14:02:26.123Z"), "15/3/2567");
        assert_eq!(thai_date("2025-12-01"), "1/12/2568");
    }

    #[test]
    fn test_thai_date_invalid_passthrough() {
        assert_eq!(thai_date("invalid"), "invalid");
        assert_eq!(thai_date(""), "");
        assert_eq!(thai_date("2024-13-01"), "2024-13-01");
    }
}
