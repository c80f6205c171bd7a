//! Countdown to the start of Devconnect.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Opening day of Devconnect Argentina.
#[must_use]
pub fn devconnect_start() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 11, 15)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or_else(Utc::now, |dt| dt.and_utc())
}

/// Time left until an instant, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Time from `now` until `target`; all zero once `target` has passed.
    #[must_use]
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (target - now).num_seconds();
        if remaining <= 0 {
            return Self::default();
        }
        Self {
            days: remaining / SECONDS_PER_DAY,
            hours: (remaining % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (remaining % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: remaining % SECONDS_PER_MINUTE,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn splits_remaining_time() {
        let target = devconnect_start();
        let now = target - Duration::seconds(2 * SECONDS_PER_DAY + 3 * SECONDS_PER_HOUR + 4 * 60 + 5);

        assert_eq!(
            Countdown::until(target, now),
            Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 }
        );
    }

    #[test]
    fn past_target_is_zero() {
        let target = devconnect_start();
        assert!(Countdown::until(target, target + Duration::hours(1)).is_over());
        assert!(Countdown::until(target, target).is_over());
    }
}
