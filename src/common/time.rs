//! Time utilities.

use chrono::{TimeZone, Utc};

/// Current Unix timestamp in milliseconds (UTC).
pub fn unix_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to an RFC 3339 string.
pub fn timestamp_to_rfc3339(timestamp_ms: i64) -> String {
    let seconds = timestamp_ms.div_euclid(1000);
    let nanos = (timestamp_ms.rem_euclid(1000) * 1_000_000) as u32;
    match Utc.timestamp_opt(seconds, nanos) {
        chrono::LocalResult::Single(dt) => dt.to_rfc3339(),
        _ => String::from("invalid timestamp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_rfc3339_epoch() {
        // given (precondition):
        let ts = 0;

        // when (operation):
        let formatted = timestamp_to_rfc3339(ts);

        // then (expected result):
        assert_eq!(formatted, "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_timestamp_to_rfc3339_with_millis() {
        // given (precondition):
        let ts = 1_500_000_000_123;

        // when (operation):
        let formatted = timestamp_to_rfc3339(ts);

        // then (expected result):
        assert_eq!(formatted, "2017-07-14T02:40:00.123+00:00");
    }

    #[test]
    fn test_unix_timestamp_ms_is_recent() {
        // given (precondition): rough lower bound, 2024-01-01
        let lower_bound = 1_704_067_200_000;

        // when (operation):
        let now = unix_timestamp_ms();

        // then (expected result):
        assert!(now > lower_bound);
    }
}
