use crate::models::analysis::{AnalysisResult, Topic};
use crate::models::claim::Claim;

/// Derives an ephemeral analysis from a claim.
///
/// Analysis never fails: every field of the result must be populated for any
/// valid claim, however short or punctuation-free.
pub trait ClaimAnalyzer {
    /// Produce the full analysis for a claim
    fn analyze(&self, claim: &Claim) -> AnalysisResult;

    /// Classify the topic of arbitrary text. Exposed separately because the
    /// source matcher re-runs classification on the raw claim.
    fn classify_topic(&self, text: &str) -> Topic;
}
