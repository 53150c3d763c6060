// crates/shared-kernel/src/domain/value_objects/discount_percent.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pourcentage de remise appliqué par une promotion (0 à 100)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    pub fn try_new(val: u8) -> Result<Self> {
        let discount = Self(val);
        discount.validate()?;
        Ok(discount)
    }

    /// Reconstruction rapide (catalogue statique, données déjà validées)
    pub fn new_unchecked(val: u8) -> Self {
        Self(val)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl ValueObject for DiscountPercent {
    fn validate(&self) -> Result<()> {
        if self.0 > 100 {
            return Err(DomainError::Validation {
                field: "discount_percent",
                reason: format!("'{}' exceeds 100%", self.0),
            });
        }
        Ok(())
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for DiscountPercent {
    type Error = DomainError;

    fn try_from(val: u8) -> Result<Self> {
        Self::try_new(val)
    }
}
