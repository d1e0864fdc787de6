use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CheckerConfig;
use crate::errors::FactCheckResult;
use crate::models::claim::Claim;
use crate::models::verdict::{CheckOutcome, CheckResult};
use crate::traits::claim_analyzer::ClaimAnalyzer;
use crate::traits::fact_checker::FactChecker;
use crate::traits::source_matcher::SourceMatcher;
use crate::traits::verdict_synthesizer::VerdictSynthesizer;

use super::analyzer::HeuristicClaimAnalyzer;
use super::matcher::CatalogSourceMatcher;
use super::remote::RemoteBackendClient;
use super::synthesizer::WeightedVerdictSynthesizer;

/// The full check pipeline: one optional remote attempt, then the local
/// simulation fallback.
///
/// Checks are serialized through `&mut self`; there is no shared mutable
/// state beyond the rng, and the catalog inside the matcher is read-only.
pub struct CheckPipeline {
    analyzer: HeuristicClaimAnalyzer,
    matcher: CatalogSourceMatcher,
    synthesizer: WeightedVerdictSynthesizer,
    remote: Option<RemoteBackendClient>,
    strict_remote: bool,
    simulate_latency: bool,
    rng: StdRng,
}

impl CheckPipeline {
    /// Build the pipeline from configuration. A configured endpoint enables
    /// the remote attempt; a configured seed makes the simulation
    /// deterministic.
    pub fn from_config(config: &CheckerConfig) -> FactCheckResult<Self> {
        let remote = match config.resolve_endpoint() {
            Some(endpoint) => Some(RemoteBackendClient::new(endpoint, config.request_timeout())?),
            None => {
                debug!("No backend endpoint configured; simulation only");
                None
            }
        };

        let rng = match config.seed {
            Some(seed) => {
                info!("Using fixed simulation seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            analyzer: HeuristicClaimAnalyzer::new(),
            matcher: CatalogSourceMatcher::new(config.catalog.clone()),
            synthesizer: WeightedVerdictSynthesizer::new(),
            remote,
            strict_remote: config.backend.strict,
            simulate_latency: config.simulate_latency,
            rng,
        })
    }

    /// Run the local simulation pipeline: analyze, match, synthesize.
    pub fn simulate(&mut self, claim: &Claim) -> FactCheckResult<CheckResult> {
        let analysis = self.analyzer.analyze(claim);
        let sources = self.matcher.match_sources(claim, &mut self.rng);
        let (verdict, confidence_percent) =
            self.synthesizer
                .synthesize(&analysis, &sources, &mut self.rng)?;

        Ok(CheckResult {
            claim: claim.clone(),
            analysis,
            sources,
            verdict,
            confidence_percent,
            timestamp: Utc::now(),
        })
    }

    /// Artificial 2000-4000 ms delay so a simulated check does not return
    /// suspiciously fast.
    async fn processing_delay(&mut self) {
        if !self.simulate_latency {
            return;
        }
        let millis = self.rng.gen_range(2000..=4000);
        debug!("Simulating {} ms of processing latency", millis);
        tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
    }
}

#[async_trait]
impl FactChecker for CheckPipeline {
    async fn check(&mut self, claim: &Claim) -> FactCheckResult<CheckOutcome> {
        self.processing_delay().await;

        if let Some(remote) = &self.remote {
            match remote.check_claim(claim).await {
                Ok(report) => return Ok(CheckOutcome::Remote(report)),
                Err(e) if !self.strict_remote && e.allows_fallback() => {
                    // Expected path when the backend is down, not an error
                    info!("Backend not available, using local simulation: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        let result = self.simulate(claim)?;
        Ok(CheckOutcome::Simulated(result))
    }
}
