//! Small formatting filters the templates used to apply at build time.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO `YYYY-MM-DD` date the way article bylines show it:
/// `"2024-03-01"` becomes `"Mar 1, 2024"`. Input that does not parse is
/// returned unchanged.
pub fn format_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    let mut parts = date_part.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_string();
    };
    let Ok(month_num) = month.parse::<usize>() else {
        return iso.to_string();
    };
    let Ok(day_num) = day.parse::<u32>() else {
        return iso.to_string();
    };
    let Some(month_name) = month_num.checked_sub(1).and_then(|idx| MONTHS.get(idx)) else {
        return iso.to_string();
    };
    format!("{month_name} {day_num}, {year}")
}

/// English plural suffix for a count: `"1 post"`, `"3 posts"`.
pub fn pluralize(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_date("2024-03-01"), "Mar 1, 2024");
        assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
    }

    #[test]
    fn strips_time_component() {
        assert_eq!(format_date("2024-03-01T09:30:00Z"), "Mar 1, 2024");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date("2024-00-01"), "2024-00-01");
    }

    #[test]
    fn pluralizes_everything_but_one() {
        assert_eq!(pluralize(0), "s");
        assert_eq!(pluralize(1), "");
        assert_eq!(pluralize(2), "s");
    }
}
