use serde::{Deserialize, Serialize};

use crate::errors::{FactCheckError, FactCheckResult};

/// Minimum claim length accepted for checking, in characters
pub const MIN_CLAIM_LEN: usize = 10;

/// A user-submitted statement to be evaluated.
///
/// Construction validates the minimum length; once built the text is
/// immutable, so every downstream stage can assume a well-formed claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claim(String);

impl Claim {
    /// Create a claim from raw user input. The input is trimmed and rejected
    /// if shorter than [`MIN_CLAIM_LEN`] characters.
    pub fn new(raw: &str) -> FactCheckResult<Self> {
        let text = raw.trim();
        if text.chars().count() < MIN_CLAIM_LEN {
            return Err(FactCheckError::InvalidClaim(format!(
                "Claim must be at least {} characters long",
                MIN_CLAIM_LEN
            )));
        }
        Ok(Claim(text.to_string()))
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Claim length in characters, as reported in analysis results
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
