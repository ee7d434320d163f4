//! Timestamp source for entities.

use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time truncated to microseconds.
///
/// Postgres `timestamptz` keeps microsecond precision, so entities built
/// with this value compare equal after a round trip through the store.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_now_has_microsecond_precision() {
        let ts = now();
        assert_eq!(ts.nanosecond() % 1_000, 0);
    }
}
