use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an evidence item relative to the proposition.
/// Serialized as the integer `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Polarity {
    Supports,
    Opposes,
}

impl Polarity {
    /// `+1.0` for supporting evidence, `-1.0` for opposing evidence.
    pub fn sign(self) -> f64 {
        match self {
            Self::Supports => 1.0,
            Self::Opposes => -1.0,
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Supports),
            -1 => Ok(Self::Opposes),
            other => Err(format!("polarity must be 1 or -1, got {other}")),
        }
    }
}

impl From<Polarity> for i8 {
    fn from(p: Polarity) -> Self {
        match p {
            Polarity::Supports => 1,
            Polarity::Opposes => -1,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supports => write!(f, "+1"),
            Self::Opposes => write!(f, "-1"),
        }
    }
}
