use serde::{Deserialize, Serialize};

/// Topic category assigned to a claim by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Health,
    Politics,
    Science,
    Economics,
    General,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Topic::Health => "health",
            Topic::Politics => "politics",
            Topic::Science => "science",
            Topic::Economics => "economics",
            Topic::General => "general",
        };
        write!(f, "{}", name)
    }
}

/// Sentiment assigned to a claim by exact word counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        write!(f, "{}", name)
    }
}

/// Structural complexity bucket, from average sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Weight applied to the confidence computation
    pub fn confidence_factor(&self) -> f64 {
        match self {
            Complexity::Low => 1.1,
            Complexity::Medium => 1.0,
            Complexity::High => 0.9,
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Per-request derived view of a claim. Ephemeral; produced fresh on every
/// check and discarded after rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// At most 10 keywords, in original claim order
    pub keywords: Vec<String>,
    pub topic: Topic,
    pub sentiment: Sentiment,
    /// Claim length in characters
    pub length: usize,
    pub complexity: Complexity,
}
