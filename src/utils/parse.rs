use crate::utils::constants::REPORT_DATE_FORMAT;
use chrono::NaiveDate;

/// Parse an hour count written with either a decimal comma or a decimal point.
///
/// Anything that does not read as a finite number yields `None`; a bad cell
/// only ever removes that one value from the average.
///
/// # Examples
/// ```
/// use outage_dashboard::utils::parse_hours;
///
/// assert_eq!(parse_hours(Some("4,5")), Some(4.5));
/// assert_eq!(parse_hours(Some(" 6 ")), Some(6.0));
/// assert_eq!(parse_hours(Some("about 3")), None);
/// assert_eq!(parse_hours(None), None);
/// ```
pub fn parse_hours(value: Option<&str>) -> Option<f64> {
    let text = value?.trim();
    if text.is_empty() {
        return None;
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse a `dd.mm.yyyy` report date. Day and month may omit the leading zero.
pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), REPORT_DATE_FORMAT).ok()
}

/// Canonical `dd.mm.yyyy` rendering used for grouping keys and output rows.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}

/// Render an average the way the clean dataset stores it: shortest
/// round-trip form, always with a fractional part.
pub fn format_hours(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}
