use crate::criteria;
use crate::dedupe::dedupe;
use crate::explain::explain;
use crate::filter;
use crate::profile::{self, Profile};
use crate::types::config::EngineConfig;
use crate::types::preferences::Preferences;
use crate::types::record::VehicleRecord;
use crate::types::scoring::ScoredRecord;
use crate::weights::compose;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of one ranking call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub profile: Profile,
    /// Records that survived the filter and were scored.
    pub considered: usize,
    pub results: Vec<ScoredRecord>,
}

/// Stateless apart from its settings; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classify(&self, preferences: &Preferences) -> Profile {
        profile::classify(preferences, &self.config.classifier)
    }

    pub fn filter(&self, records: &[VehicleRecord], preferences: &Preferences) -> Vec<VehicleRecord> {
        let profile = self.classify(preferences);
        filter::filter(records, preferences, profile, &self.config.pricing)
    }

    pub fn score(
        &self,
        record: VehicleRecord,
        preferences: &Preferences,
        profile: Profile,
    ) -> ScoredRecord {
        let detailed_scores =
            criteria::detailed_scores(&record, preferences, profile, &self.config.pricing);
        let recommendation_score = compose(&detailed_scores, profile, preferences);
        let recommendation_reason =
            explain(&record, &detailed_scores, profile, &self.config.explain);

        ScoredRecord {
            record,
            recommendation_score,
            detailed_scores,
            recommendation_reason,
        }
    }

    pub fn rank(&self, records: &[VehicleRecord], preferences: &Preferences) -> Ranking {
        let profile = self.classify(preferences);
        let candidates = filter::filter(records, preferences, profile, &self.config.pricing);
        let considered = candidates.len();
        debug!(%profile, total = records.len(), considered, "filtered catalog");

        let mut results: Vec<ScoredRecord> = candidates
            .into_par_iter()
            .map(|record| self.score(record, preferences, profile))
            .collect();

        // stable: equal scores keep catalog order
        results.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));

        if self.config.output.dedupe {
            results = dedupe(results);
        }
        if let Some(top_n) = self.config.output.top_n {
            results.truncate(top_n);
        }

        info!(
            %profile,
            considered,
            returned = results.len(),
            best = ?results.first().map(|r| r.recommendation_score),
            "ranked catalog"
        );
        Ranking {
            profile,
            considered,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::OutputConfig;
    use serde_json::json;

    fn records(values: Vec<serde_json::Value>) -> Vec<VehicleRecord> {
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).expect("record should deserialize"))
            .collect()
    }

    fn sample_catalog() -> Vec<VehicleRecord> {
        records(vec![
            json!({ "メーカー": "ダイハツ", "車種": "タント", "ボディタイプ": "軽自動車",
                    "価格帯(万円)": 140, "燃費(km/L)": 22.7, "燃料の種類": "レギュラー",
                    "排気量": 658, "自動車税(円)": 10800, "乗車定員": "4名" }),
            json!({ "メーカー": "トヨタ", "車種": "プリウス", "ボディタイプ": "ハッチバック",
                    "価格帯(万円)": "275~392", "燃費(km/L)": 32.6, "燃料の種類": "(HEV)",
                    "排気量": 1797, "自動車税(円)": 30500, "乗車定員": "5名",
                    "先進安全装備": "Toyota Safety Sense" }),
            json!({ "メーカー": "レクサス", "車種": "LS", "ボディタイプ": "セダン",
                    "価格帯(万円)": "1094~1799", "燃費(km/L)": 9.7, "燃料の種類": "ハイオク",
                    "排気量": 3444, "自動車税(円)": 57000, "乗車定員": "5名" }),
        ])
    }

    #[test]
    fn empty_catalog_yields_empty_ranking() {
        let engine = RecommendationEngine::default();
        let ranking = engine.rank(&[], &Preferences::default());
        assert_eq!(ranking.profile, Profile::General);
        assert_eq!(ranking.considered, 0);
        assert!(ranking.results.is_empty());
    }

    #[test]
    fn results_are_sorted_descending() {
        let engine = RecommendationEngine::default();
        let ranking = engine.rank(&sample_catalog(), &Preferences::default());
        assert_eq!(ranking.considered, 3);
        assert!(ranking
            .results
            .windows(2)
            .all(|pair| pair[0].recommendation_score >= pair[1].recommendation_score));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let engine = RecommendationEngine::default();
        let catalog = records(vec![
            json!({ "model": "first" }),
            json!({ "model": "second" }),
            json!({ "model": "third" }),
        ]);
        let ranking = engine.rank(&catalog, &Preferences::default());
        let order: Vec<_> = ranking
            .results
            .iter()
            .filter_map(|r| r.record.model())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn top_n_truncates_after_dedupe() {
        let engine = RecommendationEngine::new(EngineConfig {
            output: OutputConfig {
                top_n: Some(1),
                dedupe: true,
            },
            ..EngineConfig::default()
        });
        let ranking = engine.rank(&sample_catalog(), &Preferences::default());
        assert_eq!(ranking.considered, 3);
        assert_eq!(ranking.results.len(), 1);
    }

    #[test]
    fn eco_preferences_favor_the_hybrid() {
        let engine = RecommendationEngine::default();
        let prefs = Preferences::from(json!({
            "fuel_types": ["(HEV)"],
            "fuel_economy_importance": 5,
        }));
        let ranking = engine.rank(&sample_catalog(), &prefs);
        assert_eq!(ranking.profile, Profile::Eco);
        assert_eq!(ranking.considered, 1);
        assert_eq!(ranking.results[0].record.model().as_deref(), Some("プリウス"));
        assert!(ranking.results[0]
            .recommendation_reason
            .contains("32.6km/L"));
    }
}
