use rand::Rng;

use crate::models::claim::Claim;
use crate::models::source::MatchedSource;

/// Selects catalog sources for a claim and fabricates their per-request
/// content (title, url, excerpt, publish date, relevance).
///
/// All randomness flows through the injected generator so a seeded rng makes
/// the selection and the fabricated fields reproducible.
pub trait SourceMatcher {
    /// Match 3-5 catalog sources against a claim. Returns an empty list only
    /// if no catalog entry passed the topic filter.
    fn match_sources<R: Rng + ?Sized>(&self, claim: &Claim, rng: &mut R) -> Vec<MatchedSource>;
}
