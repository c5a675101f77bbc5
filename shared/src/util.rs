use chrono::{DateTime, NaiveDateTime};

/// Render a server timestamp as `YYYY-MM-DD`.
///
/// Accepts RFC 3339, RFC 2822 (`Tue, 21 Oct 2025 10:00:00 GMT`) and naive
/// ISO timestamps. Anything else is shown as-is; `None` becomes `N/A`.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "N/A".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Render an optional number, `N/A` when missing or zero
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => {
            if v.fract() == 0.0 {
                format!("{}", v as i64)
            } else {
                format!("{v}")
            }
        }
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2025-10-21T10:00:00Z")), "2025-10-21");
        assert_eq!(format_date(Some("Tue, 21 Oct 2025 10:00:00 GMT")), "2025-10-21");
        assert_eq!(format_date(Some("2025-10-21T10:00:00.123456")), "2025-10-21");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(Some(1.0)), "1");
        assert_eq!(format_metric(Some(2.5)), "2.5");
        assert_eq!(format_metric(Some(0.0)), "N/A");
        assert_eq!(format_metric(None), "N/A");
    }
}
