//! Crag identifier value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Opaque identifier of a climbing area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CragId(u64);

impl CragId {
    /// Create a crag ID from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CragId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CragId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for CragId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::ValidationError(format!("invalid crag id: {s}")))
    }
}
