// Wall-clock and elapsed "HH:MM" values.
//
// Purpose
// - One type for open times, durations and derived end times.
// - Add a duration to a time of day with 24 hour wraparound.
//
// Notes
// - Hours are 0..=23 and minutes 0..=59 for both times of day and durations.
// - add_with_overflow reports how many midnights the addition crossed, so callers
//   can keep track of the calendar day an end time falls on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_DAY: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time format: expected HH:MM, got {input:?}")]
pub struct InvalidTimeFormat {
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeFormat> {
        if u32::from(hour) >= HOURS_PER_DAY || u32::from(minute) >= MINUTES_PER_HOUR {
            return Err(InvalidTimeFormat {
                input: format!("{hour}:{minute}"),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::MIDNIGHT
    }

    /// Adds `duration` by summing hours and minutes independently, carrying
    /// whole hours out of the minutes, and wrapping the hour total at 24.
    /// The second value is the number of midnights crossed.
    pub fn add_with_overflow(self, duration: ClockTime) -> (ClockTime, u32) {
        let mut hours = u32::from(self.hour) + u32::from(duration.hour);
        let mut minutes = u32::from(self.minute) + u32::from(duration.minute);

        if minutes >= MINUTES_PER_HOUR {
            hours += minutes / MINUTES_PER_HOUR;
            minutes %= MINUTES_PER_HOUR;
        }

        let days = hours / HOURS_PER_DAY;
        let time = ClockTime {
            hour: (hours % HOURS_PER_DAY) as u8,
            minute: minutes as u8,
        };
        (time, days)
    }
}

/// Adds an elapsed `duration` to `base`, wrapping silently past 24:00.
pub fn add_time(base: ClockTime, duration: ClockTime) -> ClockTime {
    base.add_with_overflow(duration).0
}

impl FromStr for ClockTime {
    type Err = InvalidTimeFormat;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTimeFormat {
            input: input.to_string(),
        };

        let (hours, minutes) = input.split_once(':').ok_or_else(invalid)?;
        let is_numeric = |part: &str| {
            (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_numeric(hours) || minutes.len() != 2 || !is_numeric(minutes) {
            return Err(invalid());
        }

        let hour = hours.parse::<u8>().map_err(|_| invalid())?;
        let minute = minutes.parse::<u8>().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
