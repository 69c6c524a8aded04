//! Per-run inputs that would otherwise be read from ambient process state.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::constants::DEFAULT_FOOTER_TIMEZONE;
use crate::error::{FightCalError, FightCalResult};

/// Everything a feed build needs besides the events themselves.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Wall-clock time of this build. Stamped into every description footer
    /// and used as DTSTAMP.
    pub generated_at: DateTime<Utc>,
    /// Zone used to interpret event start times.
    pub timezone: Tz,
    /// Zone used for the "Accurate as of" footer.
    pub footer_timezone: Tz,
}

impl BuildContext {
    pub fn new(generated_at: DateTime<Utc>, timezone: Tz, footer_timezone: Tz) -> Self {
        BuildContext {
            generated_at,
            timezone,
            footer_timezone,
        }
    }

    /// Context for a build happening right now.
    pub fn now(timezone: Option<&str>, footer_timezone: Option<&str>) -> FightCalResult<Self> {
        Ok(BuildContext {
            generated_at: Utc::now(),
            timezone: resolve_timezone(timezone)?,
            footer_timezone: parse_timezone(footer_timezone.unwrap_or(DEFAULT_FOOTER_TIMEZONE))?,
        })
    }
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> FightCalResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| FightCalError::InvalidTimezone(name.to_string()))
}

/// Resolve the event timezone: an explicit name, else the system zone, else UTC.
pub fn resolve_timezone(name: Option<&str>) -> FightCalResult<Tz> {
    if let Some(name) = name {
        return parse_timezone(name);
    }

    match iana_time_zone::get_timezone() {
        Ok(system) => Ok(system.parse::<Tz>().unwrap_or_else(|_| {
            warn!(timezone = %system, "system timezone not recognized, using UTC");
            Tz::UTC
        })),
        Err(e) => {
            warn!(error = %e, "could not determine system timezone, using UTC");
            Ok(Tz::UTC)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone_known_name() {
        assert_eq!(parse_timezone("America/Toronto").unwrap(), Tz::America__Toronto);
    }

    #[test]
    fn test_parse_timezone_unknown_name() {
        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert!(
            matches!(err, FightCalError::InvalidTimezone(ref name) if name == "Mars/Olympus_Mons"),
            "Unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_explicit_timezone_wins_over_system() {
        assert_eq!(resolve_timezone(Some("Europe/London")).unwrap(), Tz::Europe__London);
    }
}
