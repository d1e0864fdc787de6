pub mod cli;
pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{builtin_catalog, BackendConfig, CheckerConfig, ConfigError};
pub use errors::{FactCheckError, FactCheckResult};
pub use implementations::{
    analyzer::HeuristicClaimAnalyzer,
    checker::CheckPipeline,
    matcher::CatalogSourceMatcher,
    remote::RemoteBackendClient,
    synthesizer::{verdict_for_score, verdict_score, WeightedVerdictSynthesizer},
};
pub use models::{
    analysis::{AnalysisResult, Complexity, Sentiment, Topic},
    claim::{Claim, MIN_CLAIM_LEN},
    source::{MatchedSource, Source, SourceCategory},
    verdict::{CheckOutcome, CheckResult, RelatedArticle, RemoteReport, Verdict, VerdictCategory},
};
pub use traits::{ClaimAnalyzer, FactChecker, SourceMatcher, VerdictSynthesizer};
