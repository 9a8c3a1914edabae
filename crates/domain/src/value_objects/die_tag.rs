//! Per-die classification tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Classification assigned 1:1 to each elementary die result, in the exact
/// order the external dice engine consumed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieTag {
    /// Base pool die
    Primary,
    /// Bonus die granted by a specialty
    Specialty,
    /// Distinguished bonus die ("fate" die), tagged separately for rendering
    Fate,
    /// Could not be attributed (more results than expected slots)
    Unknown,
}

impl fmt::Display for DieTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieTag::Primary => write!(f, "primary"),
            DieTag::Specialty => write!(f, "specialty"),
            DieTag::Fate => write!(f, "fate"),
            DieTag::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for DieTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(DieTag::Primary),
            "specialty" => Ok(DieTag::Specialty),
            "fate" => Ok(DieTag::Fate),
            "unknown" => Ok(DieTag::Unknown),
            other => Err(DomainError::parse(format!("unknown die tag: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_from_str_round_trip() {
        for tag in [DieTag::Primary, DieTag::Specialty, DieTag::Fate, DieTag::Unknown] {
            let parsed: DieTag = tag.to_string().parse().unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        assert!("wild".parse::<DieTag>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&DieTag::Specialty).unwrap();
        assert_eq!(json, "\"specialty\"");
    }
}
