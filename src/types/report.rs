use crate::engine::Ranking;
use crate::profile::Profile;
use crate::types::scoring::ScoredRecord;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub profile: Profile,
    pub catalog_digest: String,
    pub considered: usize,
    pub results: Vec<ScoredRecord>,
}

impl RankingReport {
    pub fn new(ranking: Ranking, catalog_digest: impl Into<String>) -> Self {
        Self {
            profile: ranking.profile,
            catalog_digest: catalog_digest.into(),
            considered: ranking.considered,
            results: ranking.results,
        }
    }
}
