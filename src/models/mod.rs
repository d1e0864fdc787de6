pub mod analysis;
pub mod claim;
pub mod source;
pub mod verdict;

pub use analysis::{AnalysisResult, Complexity, Sentiment, Topic};
pub use claim::Claim;
pub use source::{MatchedSource, Source, SourceCategory};
pub use verdict::{CheckOutcome, CheckResult, RelatedArticle, RemoteReport, Verdict, VerdictCategory};
