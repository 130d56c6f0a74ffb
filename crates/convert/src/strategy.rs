//! Decomposition strategy selection.

use serde::{Deserialize, Serialize};

/// Algorithm used to decompose an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Largest denomination first. Minimal only for canonical sets, which the
    /// caller asserts; the engine never checks it.
    #[default]
    Greedy,
    /// Minimum total count via dynamic programming on an integer grid.
    /// Bounded by the engine configuration.
    Optimal,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::Optimal => write!(f, "optimal"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "optimal" => Ok(Self::Optimal),
            _ => Err(format!("Unknown strategy: {s}")),
        }
    }
}
