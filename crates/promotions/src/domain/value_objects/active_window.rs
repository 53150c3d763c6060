// crates/promotions/src/domain/value_objects/active_window.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{ClockTime, ValueObject};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

/// Fenêtre horaire locale [start, end] d'une promotion.
/// Les fenêtres à cheval sur minuit ne sont pas supportées : start < end,
/// toujours. Les deux bornes sont inclusives, une promotion reste active
/// pile à son heure de fin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWindow {
    start: ClockTime,
    end: ClockTime,
}

impl ActiveWindow {
    pub fn try_new(start: ClockTime, end: ClockTime) -> Result<Self> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Reconstruction rapide (catalogue statique, données déjà validées)
    pub fn new_unchecked(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Bornes inclusives des deux côtés
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time <= self.end
    }
}

impl ValueObject for ActiveWindow {
    fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(DomainError::Validation {
                field: "active_window",
                reason: format!(
                    "start '{}' must be strictly before end '{}' (overnight windows unsupported)",
                    self.start, self.end
                ),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ActiveWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
