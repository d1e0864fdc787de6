use rand::Rng;

use crate::errors::FactCheckResult;
use crate::models::analysis::AnalysisResult;
use crate::models::source::MatchedSource;
use crate::models::verdict::Verdict;

/// Combines the analysis and matched sources into a verdict and a confidence
/// percentage.
///
/// Both outputs are intentionally randomized simulations, not evidence-based
/// determinations; the jitter comes from the injected generator.
pub trait VerdictSynthesizer {
    /// Synthesize a verdict and a confidence percent in [30, 95].
    ///
    /// An empty source list is a reportable error, never a silent division
    /// by zero.
    fn synthesize<R: Rng + ?Sized>(
        &self,
        analysis: &AnalysisResult,
        sources: &[MatchedSource],
        rng: &mut R,
    ) -> FactCheckResult<(Verdict, u8)>;
}
