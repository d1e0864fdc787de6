pub mod analyzer;
pub mod checker;
pub mod matcher;
pub mod remote;
pub mod synthesizer;

pub use analyzer::HeuristicClaimAnalyzer;
pub use checker::CheckPipeline;
pub use matcher::CatalogSourceMatcher;
pub use remote::RemoteBackendClient;
pub use synthesizer::WeightedVerdictSynthesizer;
