use log::debug;
use rand::Rng;

use crate::errors::{FactCheckError, FactCheckResult};
use crate::models::analysis::AnalysisResult;
use crate::models::source::MatchedSource;
use crate::models::verdict::{Verdict, VerdictCategory};
use crate::traits::verdict_synthesizer::VerdictSynthesizer;

/// Map a verdict score onto a category. Pure: the randomness of the score is
/// the caller's business.
pub fn verdict_for_score(score: f64) -> VerdictCategory {
    if score > 85.0 {
        VerdictCategory::True
    } else if score > 70.0 {
        VerdictCategory::Mixed
    } else if score > 50.0 {
        VerdictCategory::Unverified
    } else {
        VerdictCategory::False
    }
}

/// Weighted verdict score: credibility and relevance averages, a bonus per
/// source, and the supplied jitter (uniform in [0, 20) in production).
pub fn verdict_score(avg_credibility: f64, avg_relevance: f64, source_count: usize, jitter: f64) -> f64 {
    avg_credibility * 0.4 + avg_relevance * 0.3 + source_count as f64 * 5.0 + jitter
}

/// Synthesizes a verdict and confidence from matched sources.
///
/// Both numbers are randomized simulations by design; nothing here weighs
/// evidence. The only guarantee is that the outputs stay inside their
/// documented ranges.
#[derive(Debug, Clone, Default)]
pub struct WeightedVerdictSynthesizer;

impl WeightedVerdictSynthesizer {
    pub fn new() -> Self {
        Self
    }

    fn averages(sources: &[MatchedSource]) -> (f64, f64) {
        let count = sources.len() as f64;
        let avg_credibility = sources
            .iter()
            .map(|s| s.credibility_score() as f64)
            .sum::<f64>()
            / count;
        let avg_relevance = sources
            .iter()
            .map(|s| s.relevance_score as f64)
            .sum::<f64>()
            / count;
        (avg_credibility, avg_relevance)
    }

    /// Confidence in [0.30, 0.95], rounded to a whole percent
    fn confidence_percent<R: Rng + ?Sized>(
        analysis: &AnalysisResult,
        avg_credibility: f64,
        source_count: usize,
        rng: &mut R,
    ) -> u8 {
        let source_factor = source_count.min(5) as f64 / 5.0;
        let raw = (avg_credibility / 100.0) * analysis.complexity.confidence_factor() * source_factor;
        let jitter = rng.gen_range(-0.05..0.05);
        let clamped = (raw + jitter).clamp(0.30, 0.95);
        (clamped * 100.0).round() as u8
    }
}

impl VerdictSynthesizer for WeightedVerdictSynthesizer {
    fn synthesize<R: Rng + ?Sized>(
        &self,
        analysis: &AnalysisResult,
        sources: &[MatchedSource],
        rng: &mut R,
    ) -> FactCheckResult<(Verdict, u8)> {
        if sources.is_empty() {
            return Err(FactCheckError::NoMatchingSources);
        }

        let (avg_credibility, avg_relevance) = Self::averages(sources);
        let jitter = rng.gen_range(0.0..20.0);
        let score = verdict_score(avg_credibility, avg_relevance, sources.len(), jitter);
        let verdict = Verdict::new(verdict_for_score(score));
        let confidence = Self::confidence_percent(analysis, avg_credibility, sources.len(), rng);

        debug!(
            "Synthesized verdict {:?} (score {:.1}) with {}% confidence from {} sources",
            verdict.category,
            score,
            confidence,
            sources.len()
        );

        Ok((verdict, confidence))
    }
}
