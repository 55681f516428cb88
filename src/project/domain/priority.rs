//! Project priority and its accepted spellings.

use super::ParsePriorityError;
use crate::normalize::CanonicalValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectPriority {
    /// Needs attention first.
    High,
    /// Default working priority.
    Medium,
    /// Lowest severity; also the fallback for unrecognized input.
    Low,
}

impl CanonicalValue for ProjectPriority {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("High", Self::High),
        ("domain.High", Self::High),
        ("Medium", Self::Medium),
        ("domain.Medium", Self::Medium),
        ("Low", Self::Low),
        ("domain.Low", Self::Low),
    ];
    const FALLBACK: Self = Self::Low;

    fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for ProjectPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of a persisted label; unlike normalization, unknown labels
/// are an error.
impl TryFrom<&str> for ProjectPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}
