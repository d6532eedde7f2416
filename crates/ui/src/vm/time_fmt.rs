use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::format_datetime;
    use mail_core::time::fixed_now;

    #[test]
    fn formats_to_minute_precision() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13");
    }
}
