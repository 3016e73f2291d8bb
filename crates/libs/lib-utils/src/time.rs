//! # Time Utilities
//!
//! Relative time labels for activity feeds ("hace 2 horas").

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Spanish relative label for how long ago `moment` was, measured from `now`.
///
/// Future moments and anything under a minute read as "justo ahora".
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use lib_utils::time::format_relative;
///
/// let now = Utc::now();
/// assert_eq!(format_relative(now - Duration::hours(2), now), "hace 2 horas");
/// assert_eq!(format_relative(now - Duration::days(1), now), "hace 1 día");
/// ```
pub fn format_relative(moment: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(moment);

    let (count, singular, plural) = if elapsed.num_days() >= 1 {
        (elapsed.num_days(), "día", "días")
    } else if elapsed.num_hours() >= 1 {
        (elapsed.num_hours(), "hora", "horas")
    } else if elapsed.num_minutes() >= 1 {
        (elapsed.num_minutes(), "minuto", "minutos")
    } else {
        return "justo ahora".to_string();
    };

    let unit = if count == 1 { singular } else { plural };
    format!("hace {count} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_relative_units() {
        let now = now_utc();
        assert_eq!(format_relative(now - Duration::minutes(1), now), "hace 1 minuto");
        assert_eq!(format_relative(now - Duration::minutes(45), now), "hace 45 minutos");
        assert_eq!(format_relative(now - Duration::hours(1), now), "hace 1 hora");
        assert_eq!(format_relative(now - Duration::days(3), now), "hace 3 días");
    }

    #[test]
    fn test_format_relative_recent_and_future() {
        let now = now_utc();
        assert_eq!(format_relative(now - Duration::seconds(10), now), "justo ahora");
        assert_eq!(format_relative(now + Duration::hours(5), now), "justo ahora");
    }
}
