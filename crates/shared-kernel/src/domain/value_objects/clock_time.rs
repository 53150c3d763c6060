// crates/shared-kernel/src/domain/value_objects/clock_time.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heure locale "HH:MM" (24h, zéro-paddée).
/// L'ordre dérivé sur (hours, minutes) est équivalent à l'ordre
/// lexicographique des chaînes "HH:MM", ce qui préserve les comparaisons
/// de fenêtres de promotions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
}

impl ClockTime {
    pub fn try_new(hours: u8, minutes: u8) -> Result<Self> {
        let time = Self { hours, minutes };
        time.validate()?;
        Ok(time)
    }

    /// Reconstruction rapide (catalogue statique, données déjà validées)
    pub fn new_unchecked(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Position dans la journée, utilisée pour les calculs de décomptes
    pub fn minutes_from_midnight(&self) -> u32 {
        u32::from(self.hours) * 60 + u32::from(self.minutes)
    }
}

impl ValueObject for ClockTime {
    fn validate(&self) -> Result<()> {
        if self.hours > 23 || self.minutes > 59 {
            return Err(DomainError::Validation {
                field: "clock_time",
                reason: format!("'{:02}:{:02}' is not a valid HH:MM time", self.hours, self.minutes),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for ClockTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DomainError::Validation {
            field: "clock_time",
            reason: format!("'{s}' is not a valid HH:MM time"),
        };

        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hours: u8 = h.parse().map_err(|_| invalid())?;
        let minutes: u8 = m.parse().map_err(|_| invalid())?;
        Self::try_new(hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        let t: ClockTime = "17:00".parse().unwrap();
        assert_eq!(t.hours(), 17);
        assert_eq!(t.minutes(), 0);
        assert_eq!(t.to_string(), "17:00");
    }

    #[test]
    fn test_ordering_matches_lexicographic_strings() {
        let a: ClockTime = "09:30".parse().unwrap();
        let b: ClockTime = "17:00".parse().unwrap();
        let c: ClockTime = "17:05".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(("09:30" < "17:00") && ("17:00" < "17:05"));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(ClockTime::try_new(24, 0).is_err());
        assert!(ClockTime::try_new(12, 60).is_err());
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("1200".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_minutes_from_midnight() {
        let t = ClockTime::new_unchecked(8, 30);
        assert_eq!(t.minutes_from_midnight(), 510);
    }
}
