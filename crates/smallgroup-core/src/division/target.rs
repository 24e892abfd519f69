use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::division::DivisionError;

/// Requested group size, guaranteed positive.
///
/// Callers usually pick something in 4..=10, but any positive size is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TargetSize(NonZeroUsize);

impl TargetSize {
    pub fn new(size: usize) -> Result<Self, DivisionError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| DivisionError::InvalidTargetSize(size.to_string()))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for TargetSize {
    type Error = DivisionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let size = usize::try_from(value)
            .map_err(|_| DivisionError::InvalidTargetSize(value.to_string()))?;
        Self::new(size)
    }
}

impl From<TargetSize> for i64 {
    fn from(size: TargetSize) -> Self {
        i64::try_from(size.get()).unwrap_or(i64::MAX)
    }
}

impl std::str::FromStr for TargetSize {
    type Err = DivisionError;

    /// Parses a decimal integer. Fractions like `"4.5"` are rejected, not rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DivisionError::InvalidTargetSize(s.to_string()))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
