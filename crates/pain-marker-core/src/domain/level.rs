//! Pain Level
//!
//! Four intensity steps, each with a fixed foreground/background color pair.

use serde::{Deserialize, Serialize};

use super::entity::DomainError;

/// Pain intensity, persisted as the integer 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PainLevel {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl PainLevel {
    /// All levels, mildest first
    pub const ALL: [PainLevel; 4] = [
        PainLevel::One,
        PainLevel::Two,
        PainLevel::Three,
        PainLevel::Four,
    ];

    pub fn value(self) -> u8 {
        match self {
            PainLevel::One => 1,
            PainLevel::Two => 2,
            PainLevel::Three => 3,
            PainLevel::Four => 4,
        }
    }

    /// Marker fill color
    pub fn color(self) -> &'static str {
        match self {
            PainLevel::One => "#FF6B6B",
            PainLevel::Two => "#FF8C8C",
            PainLevel::Three => "#FF5252",
            PainLevel::Four => "#FF0000",
        }
    }

    /// Lighter companion color used for selector backgrounds
    pub fn bg_color(self) -> &'static str {
        match self {
            PainLevel::One => "#FFE5E5",
            PainLevel::Two => "#FFCCCC",
            PainLevel::Three => "#FF9999",
            PainLevel::Four => "#FF6666",
        }
    }
}

impl TryFrom<u8> for PainLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PainLevel::One),
            2 => Ok(PainLevel::Two),
            3 => Ok(PainLevel::Three),
            4 => Ok(PainLevel::Four),
            other => Err(DomainError::InvalidInput(format!(
                "pain level must be 1-4, got {}",
                other
            ))),
        }
    }
}

impl From<PainLevel> for u8 {
    fn from(level: PainLevel) -> Self {
        level.value()
    }
}

impl std::fmt::Display for PainLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
