use core::str::FromStr;

use serde::{Deserialize, Serialize};

use barmaster_core::DomainError;

/// Unit of measure for stock and recipe ingredients.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "ml")]
    Millilitre,
    #[serde(rename = "l")]
    Litre,
    #[serde(rename = "oz")]
    Ounce,
    /// Countable units (bottles, glasses, fruit).
    #[default]
    #[serde(rename = "un")]
    Unit,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Millilitre => "ml",
            Unit::Litre => "l",
            Unit::Ounce => "oz",
            Unit::Unit => "un",
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ml" => Ok(Unit::Millilitre),
            "l" => Ok(Unit::Litre),
            "oz" => Ok(Unit::Ounce),
            "un" => Ok(Unit::Unit),
            "kg" => Ok(Unit::Kilogram),
            "g" => Ok(Unit::Gram),
            other => Err(DomainError::validation(format!("unknown unit: {other}"))),
        }
    }
}
