use chrono::{Duration, Utc};
use log::debug;
use rand::Rng;

use crate::models::analysis::Topic;
use crate::models::claim::Claim;
use crate::models::source::{MatchedSource, Source, SourceCategory};
use crate::traits::claim_analyzer::ClaimAnalyzer;
use crate::traits::source_matcher::SourceMatcher;

use super::analyzer::HeuristicClaimAnalyzer;

/// Generic excerpt pool shared by all categories
const EXCERPTS: &[&str] = &[
    "Our investigation into this claim reveals important details that provide context and clarity...",
    "According to verified sources and expert analysis, the facts surrounding this matter are...",
    "Recent evidence and expert testimony suggest that the situation is more nuanced than initially reported...",
    "Multiple credible sources have confirmed key aspects of this story while highlighting areas that require further clarification...",
    "Our fact-checking team has reviewed available evidence and consulted with experts in the field...",
];

/// Maximum slug length for fabricated urls
const SLUG_MAX_LEN: usize = 50;

/// Matches the curated catalog against a claim and fabricates article-shaped
/// content for each selected source. Selection order is stable (catalog
/// order); only the count and the per-source content are random.
#[derive(Debug, Clone)]
pub struct CatalogSourceMatcher {
    catalog: Vec<Source>,
    analyzer: HeuristicClaimAnalyzer,
}

impl CatalogSourceMatcher {
    /// Build a matcher over an immutable catalog snapshot
    pub fn new(catalog: Vec<Source>) -> Self {
        Self {
            catalog,
            analyzer: HeuristicClaimAnalyzer::new(),
        }
    }

    pub fn catalog(&self) -> &[Source] {
        &self.catalog
    }

    /// Filter the catalog for a topic, preserving catalog order. Health and
    /// science claims pull in their specialist sources; every topic accepts
    /// fact-checkers and general news.
    fn relevant_sources(&self, topic: Topic) -> Vec<&Source> {
        self.catalog
            .iter()
            .filter(|source| match topic {
                Topic::Health => matches!(
                    source.category,
                    SourceCategory::Health | SourceCategory::FactCheck | SourceCategory::News
                ),
                Topic::Science => matches!(
                    source.category,
                    SourceCategory::Science | SourceCategory::FactCheck | SourceCategory::News
                ),
                _ => matches!(
                    source.category,
                    SourceCategory::FactCheck | SourceCategory::News
                ),
            })
            .collect()
    }

    /// Lowercase, strip punctuation, join words with hyphens, cap at 50 chars
    pub fn slug(text: &str) -> String {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
            .collect();

        cleaned
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .chars()
            .take(SLUG_MAX_LEN)
            .collect()
    }

    /// First `max` characters of the claim, char-boundary safe
    fn prefix(text: &str, max: usize) -> String {
        text.chars().take(max).collect()
    }

    fn title_pool(&self, claim: &Claim, category: SourceCategory) -> Vec<String> {
        let text = claim.text();
        match category {
            SourceCategory::FactCheck => {
                let keyword = self
                    .analyzer
                    .extract_keywords(text)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| "recent news".to_string());
                vec![
                    format!("Fact Check: {}...", Self::prefix(text, 50)),
                    format!("Is it true that {}?", Self::prefix(text, 40)),
                    format!("Verifying claims about {}", keyword),
                ]
            }
            SourceCategory::News => vec![
                format!("Breaking: {}...", Self::prefix(text, 45)),
                format!("Report: {}...", Self::prefix(text, 50)),
                format!("Analysis: {}...", Self::prefix(text, 45)),
            ],
            SourceCategory::Health => vec![
                format!("Health Alert: {}...", Self::prefix(text, 40)),
                format!("Medical Update: {}...", Self::prefix(text, 35)),
                format!("Health Officials: {}...", Self::prefix(text, 35)),
            ],
            SourceCategory::Science => vec![
                format!("Study: {}...", Self::prefix(text, 45)),
                format!("Research: {}...", Self::prefix(text, 40)),
                format!("Scientists: {}...", Self::prefix(text, 35)),
            ],
        }
    }

    /// Fabricate the per-request article content for one catalog source
    fn enrich<R: Rng + ?Sized>(&self, source: &Source, claim: &Claim, rng: &mut R) -> MatchedSource {
        let titles = self.title_pool(claim, source.category);
        let title = titles[rng.gen_range(0..titles.len())].clone();
        let excerpt = EXCERPTS[rng.gen_range(0..EXCERPTS.len())].to_string();

        let days_ago = rng.gen_range(0..30);
        let publish_date = (Utc::now() - Duration::days(days_ago)).date_naive();

        MatchedSource {
            source: source.clone(),
            title,
            url: format!("https://{}/{}", source.base_url, Self::slug(claim.text())),
            excerpt,
            publish_date,
            relevance_score: rng.gen_range(70..95),
        }
    }
}

impl SourceMatcher for CatalogSourceMatcher {
    fn match_sources<R: Rng + ?Sized>(&self, claim: &Claim, rng: &mut R) -> Vec<MatchedSource> {
        let topic = self.analyzer.classify_topic(claim.text());
        let relevant = self.relevant_sources(topic);

        let requested = rng.gen_range(3..=5);
        let count = requested.min(relevant.len());

        debug!(
            "Matched {} of {} relevant sources for topic {} (requested {})",
            count,
            relevant.len(),
            topic,
            requested
        );

        relevant
            .into_iter()
            .take(count)
            .map(|source| self.enrich(source, claim, rng))
            .collect()
    }
}
