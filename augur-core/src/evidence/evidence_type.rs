use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::config::defaults;

/// Ordinal source-strength category. `A` is direct primary evidence,
/// `D` is speculative or secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EvidenceType {
    A,
    B,
    C,
    D,
}

impl EvidenceType {
    /// All variants, strongest first.
    pub const ALL: [EvidenceType; 4] = [Self::A, Self::B, Self::C, Self::D];
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(name)
    }
}

/// Maximum absolute logLR contribution per evidence type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct TypeCaps {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "D")]
    pub d: f64,
}

impl TypeCaps {
    /// Cap for one evidence type.
    pub fn cap(&self, evidence_type: EvidenceType) -> f64 {
        match evidence_type {
            EvidenceType::A => self.a,
            EvidenceType::B => self.b,
            EvidenceType::C => self.c,
            EvidenceType::D => self.d,
        }
    }
}

impl Default for TypeCaps {
    fn default() -> Self {
        Self {
            a: defaults::DEFAULT_CAP_A,
            b: defaults::DEFAULT_CAP_B,
            c: defaults::DEFAULT_CAP_C,
            d: defaults::DEFAULT_CAP_D,
        }
    }
}
