use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::claim::Claim;
use crate::models::source::MatchedSource;

/// Categorical label assigned to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictCategory {
    True,
    Mixed,
    Unverified,
    False,
}

/// Final verdict: a category plus its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub category: VerdictCategory,
    pub label: String,
}

impl Verdict {
    pub fn new(category: VerdictCategory) -> Self {
        let label = match category {
            VerdictCategory::True => "Likely True",
            VerdictCategory::Mixed => "Mixed/Partial",
            VerdictCategory::Unverified => "Unverified",
            VerdictCategory::False => "Likely False",
        };
        Verdict {
            category,
            label: label.to_string(),
        }
    }
}

/// Aggregate produced by the local simulation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub claim: Claim,
    pub analysis: AnalysisResult,
    /// 3-5 matched sources, in catalog order
    pub sources: Vec<MatchedSource>,
    pub verdict: Verdict,
    /// Integer percentage, always within [30, 95]
    pub confidence_percent: u8,
    pub timestamp: DateTime<Utc>,
}

/// An article reference returned by the remote backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub published_at: String,
}

/// Successful response body from the remote fact-check backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteReport {
    pub credibility_score: u8,
    #[serde(default)]
    pub ai_analysis: String,
    #[serde(default)]
    pub related_articles: Vec<RelatedArticle>,
    /// Extracted entities grouped by category
    #[serde(default)]
    pub entities: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub timestamp: String,
}

/// Outcome of one check cycle.
///
/// Keeping the remote and simulated shapes as distinct variants means callers
/// cannot mistake fabricated simulation output for backend-verified data.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum CheckOutcome {
    Remote(RemoteReport),
    Simulated(CheckResult),
}

impl CheckOutcome {
    pub fn is_simulated(&self) -> bool {
        matches!(self, CheckOutcome::Simulated(_))
    }
}
