#[cfg(test)]
mod tests {
    use chrono::Utc;
    use log::{debug, info};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::errors::FactCheckError;
    use crate::implementations::synthesizer::{
        verdict_for_score, verdict_score, WeightedVerdictSynthesizer,
    };
    use crate::models::analysis::{AnalysisResult, Complexity, Sentiment, Topic};
    use crate::models::source::{MatchedSource, Source, SourceCategory};
    use crate::models::verdict::VerdictCategory;
    use crate::tests::support::setup;
    use crate::traits::verdict_synthesizer::VerdictSynthesizer;

    fn analysis(complexity: Complexity) -> AnalysisResult {
        AnalysisResult {
            keywords: vec!["vaccine".to_string(), "study".to_string()],
            topic: Topic::Health,
            sentiment: Sentiment::Neutral,
            length: 42,
            complexity,
        }
    }

    fn matched(name: &str, credibility: u8, relevance: u8) -> MatchedSource {
        MatchedSource {
            source: Source {
                name: name.to_string(),
                base_url: format!("{}.example.com", name.to_lowercase()),
                credibility_score: credibility,
                category: SourceCategory::News,
            },
            title: format!("Report: {}", name),
            url: format!("https://{}.example.com/claim", name.to_lowercase()),
            excerpt: "Excerpt.".to_string(),
            publish_date: Utc::now().date_naive(),
            relevance_score: relevance,
        }
    }

    fn five_sources() -> Vec<MatchedSource> {
        (0..5).map(|i| matched(&format!("Source{}", i), 95, 90)).collect()
    }

    #[test]
    fn test_verdict_score_is_a_pure_weighted_sum() {
        setup();
        info!("Running test_verdict_score_is_a_pure_weighted_sum");

        // 0.4*95 + 0.3*90 + 5*5 + 0 = 38 + 27 + 25 = 90
        let score = verdict_score(95.0, 90.0, 5, 0.0);
        assert!((score - 90.0).abs() < f64::EPSILON);
        assert_eq!(verdict_for_score(score), VerdictCategory::True);
    }

    #[test]
    fn test_verdict_thresholds() {
        setup();

        assert_eq!(verdict_for_score(90.0), VerdictCategory::True);
        assert_eq!(verdict_for_score(85.0), VerdictCategory::Mixed);
        assert_eq!(verdict_for_score(71.0), VerdictCategory::Mixed);
        assert_eq!(verdict_for_score(70.0), VerdictCategory::Unverified);
        assert_eq!(verdict_for_score(51.0), VerdictCategory::Unverified);
        assert_eq!(verdict_for_score(50.0), VerdictCategory::False);
        assert_eq!(verdict_for_score(0.0), VerdictCategory::False);
    }

    #[test]
    fn test_confidence_always_within_bounds() {
        setup();
        info!("Running test_confidence_always_within_bounds");

        let synthesizer = WeightedVerdictSynthesizer::new();
        let complexities = [Complexity::Low, Complexity::Medium, Complexity::High];

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let analysis = analysis(complexities[(seed % 3) as usize]);
            let sources: Vec<_> = (0..(3 + seed % 3))
                .map(|i| matched(&format!("S{}", i), (60 + seed % 40) as u8, 70 + (seed % 25) as u8))
                .collect();

            let (_, confidence) = synthesizer
                .synthesize(&analysis, &sources, &mut rng)
                .expect("non-empty source list must synthesize");

            assert!(
                (30..=95).contains(&confidence),
                "Confidence {} out of [30, 95] with seed {}",
                confidence,
                seed
            );
        }
    }

    #[test]
    fn test_high_complexity_lowers_confidence() {
        setup();

        let synthesizer = WeightedVerdictSynthesizer::new();
        let sources = five_sources();

        // Same seed, same jitter: only the complexity factor differs
        let mut rng_low = StdRng::seed_from_u64(11);
        let mut rng_high = StdRng::seed_from_u64(11);
        let (_, low) = synthesizer
            .synthesize(&analysis(Complexity::Low), &sources, &mut rng_low)
            .unwrap();
        let (_, high) = synthesizer
            .synthesize(&analysis(Complexity::High), &sources, &mut rng_high)
            .unwrap();

        debug!("low-complexity confidence {}, high-complexity {}", low, high);
        assert!(low >= high, "Low complexity must not score below high");
    }

    #[test]
    fn test_empty_source_list_is_reportable() {
        setup();
        info!("Running test_empty_source_list_is_reportable");

        let synthesizer = WeightedVerdictSynthesizer::new();
        let mut rng = StdRng::seed_from_u64(0);
        let result = synthesizer.synthesize(&analysis(Complexity::Low), &[], &mut rng);

        assert!(matches!(result, Err(FactCheckError::NoMatchingSources)));
    }

    #[test]
    fn test_same_seed_same_synthesis() {
        setup();

        let synthesizer = WeightedVerdictSynthesizer::new();
        let sources = five_sources();

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = synthesizer
            .synthesize(&analysis(Complexity::Medium), &sources, &mut rng_a)
            .unwrap();
        let b = synthesizer
            .synthesize(&analysis(Complexity::Medium), &sources, &mut rng_b)
            .unwrap();

        assert_eq!(a.0.category, b.0.category);
        assert_eq!(a.1, b.1);
    }

    #[test]
    fn test_strong_sources_never_yield_likely_false() {
        setup();

        // avgCred 95, avgRel 90, 5 sources: score floor is 90 before jitter,
        // so the verdict can never fall below Likely True
        let synthesizer = WeightedVerdictSynthesizer::new();
        let sources = five_sources();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (verdict, _) = synthesizer
                .synthesize(&analysis(Complexity::Low), &sources, &mut rng)
                .unwrap();
            assert_eq!(verdict.category, VerdictCategory::True, "seed {}", seed);
        }
    }
}
