//! Type-safe enumerations for workout parts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// Which limb or side a part applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Right side, written `R`.
    #[serde(rename = "R")]
    Right,
    /// Left side, written `L`.
    #[serde(rename = "L")]
    Left,
}

impl Side {
    /// Single-letter marker used in sheets and output files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "R",
            Self::Left => "L",
        }
    }

    /// Parse a side marker, accepting either case.
    ///
    /// Returns `None` for anything other than a single `R` or `L`.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "R" | "r" => Some(Self::Right),
            "L" | "l" => Some(Self::Left),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_marker(s.trim()).ok_or_else(|| WorkoutError::InvalidSide(s.to_string()))
    }
}

/// Unit a weight was written in, after folding spelling variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Pounds (`lb`, `lbs`, `l`, `ls`, `po`).
    Pounds,
    /// Kilograms (`kg`, `kgs`, `k`, `ks`).
    Kilograms,
}

impl WeightUnit {
    /// Fold a raw unit token into a unit. Tokens starting with `k` are kilograms.
    pub fn from_raw(raw: &str) -> Self {
        if raw.to_ascii_lowercase().starts_with('k') {
            Self::Kilograms
        } else {
            Self::Pounds
        }
    }
}
