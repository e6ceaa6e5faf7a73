use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    time::Duration,
};

use serde::Serialize;

use crate::scanner::{self, ParseOptions};
use crate::units::{DAY, HOUR, MINUTE};
use crate::ParseDurationError;

/// A non-negative span of whole seconds split into days, hours, minutes and seconds.
///
/// Equality, ordering and hashing only look at the total.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TimePeriod {
    total_seconds: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl TimePeriod {
    /// Builds a period from explicit components. Saturates at `u64::MAX` seconds.
    pub fn new(seconds: u64, minutes: u64, hours: u64, days: u64) -> Self {
        let total = seconds
            .saturating_add(minutes.saturating_mul(MINUTE))
            .saturating_add(hours.saturating_mul(HOUR))
            .saturating_add(days.saturating_mul(DAY));
        Self::from_secs(total)
    }

    pub fn from_secs(total_seconds: u64) -> Self {
        let days = total_seconds / DAY;
        let rest = total_seconds % DAY;
        let hours = rest / HOUR;
        let rest = rest % HOUR;

        Self {
            total_seconds,
            days,
            hours,
            minutes: rest / MINUTE,
            seconds: rest % MINUTE,
        }
    }

    /// Parses a string such as "2h 30m 15s", ignoring unknown units.
    ///
    /// A number without a unit counts as minutes: "90" is an hour and a half.
    pub fn parse(source: &str) -> Result<Self, ParseDurationError> {
        Self::parse_with(source, &ParseOptions::default())
    }

    pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Self, ParseDurationError> {
        scanner::parse_seconds_with(source, options).map(Self::from_secs)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.total_seconds)
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }

    /// Renders the period as `interval <total seconds> second`.
    pub fn as_sql_interval(&self) -> String {
        format!("interval {} second", self.total_seconds)
    }
}

/// Writes `"1d 2h 3m 4s"`, skipping zero components.
///
/// Seconds are written when non-zero or when nothing else was, so zero is
/// `"0s"`. Every other component keeps its trailing space, which means a
/// period of exactly one minute renders as `"1m "`.
impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for (value, unit) in [(self.days, 'd'), (self.hours, 'h'), (self.minutes, 'm')] {
            if value > 0 {
                write!(f, "{value}{unit} ")?;
                written = true;
            }
        }
        if self.seconds > 0 || !written {
            write!(f, "{}s", self.seconds)?;
        }
        Ok(())
    }
}

impl FromStr for TimePeriod {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Duration> for TimePeriod {
    fn from(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs())
    }
}

impl From<TimePeriod> for Duration {
    fn from(period: TimePeriod) -> Self {
        period.duration()
    }
}

impl PartialEq for TimePeriod {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds == other.total_seconds
    }
}

impl Eq for TimePeriod {}

impl PartialOrd for TimePeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimePeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds.cmp(&other.total_seconds)
    }
}

impl Hash for TimePeriod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds.hash(state);
    }
}
