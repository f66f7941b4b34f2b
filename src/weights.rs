//! Dynamic reweighting of profile base weights from importance sliders.

use crate::profile::Profile;
use crate::types::preferences::{Preferences, Slider};
use crate::types::scoring::{clamp_score, Criterion, CriterionWeights, DetailedScores, Score};

/// Absorbs float noise so an exact average like 70.0 never floors to 69.
const FLOOR_EPSILON: f64 = 1e-9;

/// Slider driving each criterion; `None` keeps the base weight unchanged.
pub fn slider_for(criterion: Criterion) -> Option<Slider> {
    match criterion {
        Criterion::Price => Some(Slider::Price),
        Criterion::FuelEconomy => Some(Slider::FuelEconomy),
        Criterion::Size => Some(Slider::Space),
        Criterion::Safety => Some(Slider::Safety),
        Criterion::Maintenance => Some(Slider::Maintenance),
        Criterion::Brand => Some(Slider::Design),
        Criterion::Environmental => Some(Slider::FuelEconomy),
        Criterion::PurposeFit => None,
    }
}

/// `0.7 + 0.1 × slider`: 0.8 at slider 1, 1.0 at the neutral 3, 1.2 at 5.
pub fn modifier(slider: f64) -> f64 {
    (7.0 + slider) / 10.0
}

pub fn adjusted_weights(profile: Profile, preferences: &Preferences) -> CriterionWeights {
    let base = profile.base_weights();
    let adjust = |criterion: Criterion| {
        let weight = base.get(criterion);
        match slider_for(criterion) {
            Some(slider) => weight * modifier(preferences.importance.level(slider)),
            None => weight,
        }
    };

    CriterionWeights {
        price: adjust(Criterion::Price),
        fuel_economy: adjust(Criterion::FuelEconomy),
        size: adjust(Criterion::Size),
        safety: adjust(Criterion::Safety),
        maintenance: adjust(Criterion::Maintenance),
        brand: adjust(Criterion::Brand),
        environmental: adjust(Criterion::Environmental),
        purpose_fit: adjust(Criterion::PurposeFit),
    }
}

/// Weighted mean of the sub-scores, floored and clamped. A zero total weight
/// yields 0.
pub fn compose(scores: &DetailedScores, profile: Profile, preferences: &Preferences) -> Score {
    let weights = adjusted_weights(profile, preferences);
    let total = weights.sum();
    if total <= 0.0 {
        return 0;
    }

    let weighted: f64 = scores
        .iter()
        .map(|(criterion, score)| f64::from(score) * weights.get(criterion))
        .sum();
    clamp_score((weighted / total + FLOOR_EPSILON).floor() as i64)
}
