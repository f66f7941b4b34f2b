use crate::types::record::VehicleRecord;
use serde::Serialize;

pub type Score = u8;

pub const MAX_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Price,
    FuelEconomy,
    Size,
    Safety,
    Maintenance,
    Brand,
    Environmental,
    PurposeFit,
}

impl Criterion {
    pub const ALL: [Criterion; 8] = [
        Criterion::Price,
        Criterion::FuelEconomy,
        Criterion::Size,
        Criterion::Safety,
        Criterion::Maintenance,
        Criterion::Brand,
        Criterion::Environmental,
        Criterion::PurposeFit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::FuelEconomy => "fuel_economy",
            Criterion::Size => "size",
            Criterion::Safety => "safety",
            Criterion::Maintenance => "maintenance",
            Criterion::Brand => "brand",
            Criterion::Environmental => "environmental",
            Criterion::PurposeFit => "purpose_fit",
        }
    }
}

/// Clamps an intermediate integer result into the score range.
pub fn clamp_score(value: i64) -> Score {
    value.clamp(0, i64::from(MAX_SCORE)) as Score
}

/// Per-criterion sub-scores of one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetailedScores {
    pub price: Score,
    pub fuel_economy: Score,
    pub size: Score,
    pub safety: Score,
    pub maintenance: Score,
    pub brand: Score,
    pub environmental: Score,
    pub purpose_fit: Score,
}

impl DetailedScores {
    pub fn get(&self, criterion: Criterion) -> Score {
        match criterion {
            Criterion::Price => self.price,
            Criterion::FuelEconomy => self.fuel_economy,
            Criterion::Size => self.size,
            Criterion::Safety => self.safety,
            Criterion::Maintenance => self.maintenance,
            Criterion::Brand => self.brand,
            Criterion::Environmental => self.environmental,
            Criterion::PurposeFit => self.purpose_fit,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, Score)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(move |criterion| (criterion, self.get(criterion)))
    }
}

/// One weight per criterion. Not required to sum to 1.0; the composer
/// normalizes by the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionWeights {
    pub price: f64,
    pub fuel_economy: f64,
    pub size: f64,
    pub safety: f64,
    pub maintenance: f64,
    pub brand: f64,
    pub environmental: f64,
    pub purpose_fit: f64,
}

impl CriterionWeights {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Price => self.price,
            Criterion::FuelEconomy => self.fuel_economy,
            Criterion::Size => self.size,
            Criterion::Safety => self.safety,
            Criterion::Maintenance => self.maintenance,
            Criterion::Brand => self.brand,
            Criterion::Environmental => self.environmental,
            Criterion::PurposeFit => self.purpose_fit,
        }
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL
            .into_iter()
            .map(|criterion| self.get(criterion))
            .sum()
    }
}

/// A catalog record with the three injected ranking fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: VehicleRecord,
    pub recommendation_score: Score,
    pub detailed_scores: DetailedScores,
    pub recommendation_reason: String,
}

impl AsRef<VehicleRecord> for ScoredRecord {
    fn as_ref(&self) -> &VehicleRecord {
        &self.record
    }
}
