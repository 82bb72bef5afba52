use chrono::NaiveDateTime;

/// Coupon expiry as submitted by the admin panel ("YYYY-MM-DD HH:MM:SS").
pub fn parse_expiration_datetime(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_panel_format() {
        let parsed = parse_expiration_datetime("2026-12-31 23:59:59").unwrap();
        assert_eq!(parsed.to_string(), "2026-12-31 23:59:59");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_expiration_datetime("31/12/2026").is_err());
    }
}
