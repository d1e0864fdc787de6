use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a curated source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceCategory {
    News,
    FactCheck,
    Health,
    Science,
}

impl std::fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceCategory::News => "news",
            SourceCategory::FactCheck => "fact-check",
            SourceCategory::Health => "health",
            SourceCategory::Science => "science",
        };
        write!(f, "{}", name)
    }
}

/// A static entry in the curated source catalog. The catalog is read-only
/// after startup; no entries are created or mutated per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub base_url: String,
    /// Curated trust rating, 0-100
    pub credibility_score: u8,
    pub category: SourceCategory,
}

/// A catalog source enriched with per-request synthesized content.
///
/// The title, url, excerpt, publish date and relevance score are fabricated
/// by the matcher, not retrieved from anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSource {
    #[serde(flatten)]
    pub source: Source,
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub publish_date: NaiveDate,
    /// Synthetic relevance, 70-94
    pub relevance_score: u8,
}

impl MatchedSource {
    pub fn name(&self) -> &str {
        &self.source.name
    }

    pub fn credibility_score(&self) -> u8 {
        self.source.credibility_score
    }
}
