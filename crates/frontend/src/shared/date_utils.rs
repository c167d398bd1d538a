/// Utilities for date and amount formatting
///
/// Provides the French display formats used across the table and dashboard.

/// Format an ISO date or datetime string to DD/MM/YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
/// Missing values render as "-".
pub fn format_date(date_str: Option<&str>) -> String {
    let Some(date_str) = date_str.filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format an amount in MAD. Missing values render as "-".
/// Example: Some(250.5) -> "250.50 MAD"
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("{:.2} MAD", a),
        None => "-".to_string(),
    }
}

/// Group an integer with non-breaking thin spaces for the KPI cards.
/// Example: 1234567 -> "1 234 567"
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-15")), "15/03/2024");
        assert_eq!(format_date(Some("2024-03-15T14:02:26Z")), "15/03/2024");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("invalid")), "invalid");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(250.5)), "250.50 MAD");
        assert_eq!(format_currency(None), "-");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
