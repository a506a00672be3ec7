use chrono::NaiveDate;
use js_sys::Date;
use shared::RangeSelection;

/// Placeholder shown for an endpoint that has not been picked yet.
const DATE_PLACEHOLDER: &str = "MM/dd/yyyy";

/// Current wall-clock date from the host environment.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Format a date for the collapsed input row.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Display text for the input row, with placeholders for unpicked endpoints.
pub fn format_range_label(selection: &RangeSelection) -> String {
    match (selection.start(), selection.end()) {
        (Some(start), Some(end)) => format!("{} ~ {}", format_date(start), format_date(end)),
        (Some(start), None) => format!("{} ~ {}", format_date(start), DATE_PLACEHOLDER),
        _ => format!("{} ~ {}", DATE_PLACEHOLDER, DATE_PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 9)), "03/09/2024");
    }

    #[test]
    fn test_format_range_label_placeholders() {
        let mut selection = RangeSelection::default();
        assert_eq!(format_range_label(&selection), "MM/dd/yyyy ~ MM/dd/yyyy");

        selection.apply_click(date(2024, 3, 11));
        assert_eq!(format_range_label(&selection), "03/11/2024 ~ MM/dd/yyyy");

        selection.apply_click(date(2024, 3, 15));
        assert_eq!(format_range_label(&selection), "03/11/2024 ~ 03/15/2024");
    }
}
