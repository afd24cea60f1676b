//! ASIN value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Amazon Standard Identification Number.
///
/// Exactly 10 alphanumeric characters, always stored uppercase. Parsing
/// accepts lowercase input (Amazon URLs are case-insensitive in the ASIN
/// segment) and normalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Asin(String);

impl Asin {
    /// Validates and normalizes a candidate ASIN.
    ///
    /// Returns `None` when the candidate is not exactly 10 ASCII
    /// alphanumeric characters. Absence of a valid ASIN is an expected
    /// outcome for callers scanning arbitrary strings, not an error.
    pub fn parse(candidate: &str) -> Option<Self> {
        if candidate.len() == 10 && candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some(Self(candidate.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Asin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Asin {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}
