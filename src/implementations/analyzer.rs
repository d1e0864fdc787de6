use log::debug;

use crate::models::analysis::{AnalysisResult, Complexity, Sentiment, Topic};
use crate::models::claim::Claim;
use crate::traits::claim_analyzer::ClaimAnalyzer;

/// Common English words excluded from keyword extraction
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on",
    "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "been", "have", "has", "had", "will", "would",
    "could", "should", "may", "might", "can", "do", "does", "did",
    "get", "got", "go", "went", "come", "came", "say", "said",
    "tell", "told", "ask", "asked", "give", "gave", "take", "took",
    "make", "made", "know", "knew", "think", "thought", "see", "saw",
    "look", "looked", "want", "wanted", "use", "used", "find", "found",
    "work", "worked", "call", "called", "try", "tried", "need", "needed",
    "feel", "felt", "seem", "seemed", "leave", "left", "put", "keep",
    "kept", "let", "begin", "began", "help", "helped", "show", "showed",
    "hear", "heard", "play", "played", "run", "ran", "move", "moved",
    "live", "lived", "believe", "believed", "hold", "held", "bring", "brought",
    "happen", "happened", "write", "wrote", "sit", "sat", "stand", "stood",
    "lose", "lost", "pay", "paid", "meet", "met", "include", "included",
    "continue", "continued", "set", "learn", "learned", "change", "changed", "lead",
    "led", "understand", "understood", "watch", "watched", "follow", "followed", "stop",
    "stopped", "create", "created", "speak", "spoke", "read", "allow", "allowed",
    "add", "added", "spend", "spent", "grow", "grew", "open", "opened",
    "walk", "walked", "win", "won", "offer", "offered", "remember", "remembered",
    "love", "loved", "consider", "considered", "appear", "appeared", "buy", "bought",
    "wait", "waited", "serve", "served", "die", "died", "send", "sent",
    "expect", "expected", "build", "built", "stay", "stayed", "fall", "fell",
    "cut", "reach", "reached", "kill", "killed", "remain", "remained", "suggest",
    "suggested", "raise", "raised", "pass", "passed", "sell", "sold", "require",
    "required", "report", "reported", "decide", "decided", "pull", "pulled", "adds",
    "allows", "appears", "asks", "begins", "believes", "brings", "builds", "buys",
    "calls", "changes", "comes", "considers", "continues", "creates", "cuts", "decides",
    "dies", "expects", "falls", "feels", "finds", "follows", "gets", "gives",
    "goes", "grows", "happens", "hears", "helps", "holds", "includes", "keeps",
    "kills", "knows", "leads", "learns", "leaves", "lets", "lives", "looks",
    "loses", "loves", "makes", "meets", "moves", "needs", "offers", "opens",
    "passes", "pays", "plays", "pulls", "puts", "raises", "reaches", "reads",
    "remains", "remembers", "reports", "requires", "runs", "says", "seems", "sees",
    "sells", "sends", "serves", "sets", "shows", "sits", "speaks", "spends",
    "stands", "stays", "stops", "suggests", "takes", "tells", "thinks", "tries",
    "understands", "uses", "waits", "walks", "wants", "watches", "wins", "works",
    "writes",
];

const HEALTH_KEYWORDS: &[&str] = &[
    "health", "medical", "disease", "vaccine", "treatment", "doctor", "hospital", "medicine",
    "covid", "virus", "bacteria",
];

const POLITICS_KEYWORDS: &[&str] = &[
    "government", "president", "election", "policy", "congress", "senate", "vote", "political",
    "democrat", "republican",
];

const SCIENCE_KEYWORDS: &[&str] = &[
    "research", "study", "scientist", "experiment", "data", "climate", "space", "technology",
    "scientific",
];

const ECONOMICS_KEYWORDS: &[&str] = &[
    "economy", "market", "stock", "price", "inflation", "economic", "financial", "money",
    "business",
];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "brilliant",
    "outstanding", "perfect",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disgusting", "worst", "hate", "fail", "wrong",
    "false",
];

/// Shortest token length kept by keyword extraction
const MIN_KEYWORD_LEN: usize = 4;

/// Maximum number of keywords reported per claim
const MAX_KEYWORDS: usize = 10;

/// Shallow, deterministic heuristics over short strings. This is simulated
/// analysis: substring matching and word counting, not NLP.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClaimAnalyzer;

impl HeuristicClaimAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Extract up to 10 keywords: lowercase, punctuation stripped, tokens of
    /// length <= 3 and stop-words dropped, original order preserved.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
            .collect();

        normalized
            .split_whitespace()
            .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(word))
            .take(MAX_KEYWORDS)
            .map(|word| word.to_string())
            .collect()
    }

    /// Count exact whitespace-token matches against a fixed word list. The
    /// tokens keep their punctuation; only case is normalized.
    fn count_matches(text: &str, list: &[&str]) -> usize {
        text.to_lowercase()
            .split_whitespace()
            .filter(|word| list.contains(word))
            .count()
    }

    pub fn analyze_sentiment(&self, text: &str) -> Sentiment {
        let positive = Self::count_matches(text, POSITIVE_WORDS);
        let negative = Self::count_matches(text, NEGATIVE_WORDS);

        if positive > negative {
            Sentiment::Positive
        } else if negative > positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Bucket complexity by average words per sentence. A text with no
    /// sentence-terminating punctuation and no words counts as low; the
    /// sentence count is guarded so this never divides by zero.
    pub fn assess_complexity(&self, text: &str) -> Complexity {
        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|segment| !segment.trim().is_empty())
            .count();

        if sentence_count == 0 {
            return Complexity::Low;
        }

        let word_count = text.split_whitespace().count();
        let avg_words_per_sentence = word_count as f64 / sentence_count as f64;

        if avg_words_per_sentence > 20.0 {
            Complexity::High
        } else if avg_words_per_sentence > 12.0 {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }
}

impl ClaimAnalyzer for HeuristicClaimAnalyzer {
    fn analyze(&self, claim: &Claim) -> AnalysisResult {
        let keywords = self.extract_keywords(claim.text());
        let topic = self.classify_topic(claim.text());
        let sentiment = self.analyze_sentiment(claim.text());
        let complexity = self.assess_complexity(claim.text());

        debug!(
            "Analyzed claim: topic={}, sentiment={}, complexity={}, {} keywords",
            topic,
            sentiment,
            complexity,
            keywords.len()
        );

        AnalysisResult {
            keywords,
            topic,
            sentiment,
            length: claim.len(),
            complexity,
        }
    }

    /// First topic whose keyword list has a substring hit wins; the priority
    /// order (health, politics, science, economics) is part of the contract.
    fn classify_topic(&self, text: &str) -> Topic {
        let lower = text.to_lowercase();

        let topics: [(Topic, &[&str]); 4] = [
            (Topic::Health, HEALTH_KEYWORDS),
            (Topic::Politics, POLITICS_KEYWORDS),
            (Topic::Science, SCIENCE_KEYWORDS),
            (Topic::Economics, ECONOMICS_KEYWORDS),
        ];

        for (topic, keywords) in topics {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return topic;
            }
        }

        Topic::General
    }
}
