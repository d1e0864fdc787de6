pub mod claim_analyzer;
pub mod fact_checker;
pub mod source_matcher;
pub mod verdict_synthesizer;

pub use claim_analyzer::ClaimAnalyzer;
pub use fact_checker::FactChecker;
pub use source_matcher::SourceMatcher;
pub use verdict_synthesizer::VerdictSynthesizer;
