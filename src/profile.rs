//! Behavioral profiles and the rule-based classifier that picks one from a
//! preference payload.

use crate::types::config::ClassifierConfig;
use crate::types::preferences::{Preferences, Slider};
use crate::types::record::FuelType;
use crate::types::scoring::CriterionWeights;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Family,
    Commuter,
    Luxury,
    Eco,
    Sporty,
    General,
}

/// Fixed description of a named profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSpec {
    pub weights: CriterionWeights,
    pub preferred_body_types: &'static [&'static str],
    pub preferred_fuel_types: &'static [FuelType],
    pub min_seats: u32,
    /// Inclusive price band in 万円.
    pub price_band: (f64, f64),
}

const OPEN_BAND: (f64, f64) = (0.0, 10_000.0);

static FAMILY: ProfileSpec = ProfileSpec {
    weights: CriterionWeights {
        price: 0.15,
        fuel_economy: 0.20,
        size: 0.10,
        safety: 0.25,
        maintenance: 0.10,
        brand: 0.10,
        environmental: 0.10,
        purpose_fit: 0.30,
    },
    preferred_body_types: &["ミニバン", "SUV", "ハッチバック"],
    preferred_fuel_types: &[],
    min_seats: 5,
    price_band: OPEN_BAND,
};

static COMMUTER: ProfileSpec = ProfileSpec {
    weights: CriterionWeights {
        price: 0.25,
        fuel_economy: 0.30,
        size: 0.15,
        safety: 0.10,
        maintenance: 0.20,
        brand: 0.10,
        environmental: 0.10,
        purpose_fit: 0.30,
    },
    preferred_body_types: &["ハッチバック", "軽自動車", "セダン"],
    preferred_fuel_types: &[],
    min_seats: 0,
    price_band: (0.0, 300.0),
};

static LUXURY: ProfileSpec = ProfileSpec {
    weights: CriterionWeights {
        price: 0.10,
        fuel_economy: 0.10,
        size: 0.10,
        safety: 0.15,
        maintenance: 0.10,
        brand: 0.20,
        environmental: 0.10,
        purpose_fit: 0.30,
    },
    preferred_body_types: &["セダン", "SUV", "オープンカー"],
    preferred_fuel_types: &[],
    min_seats: 0,
    price_band: (400.0, 10_000.0),
};

static ECO: ProfileSpec = ProfileSpec {
    weights: CriterionWeights {
        price: 0.20,
        fuel_economy: 0.35,
        size: 0.10,
        safety: 0.10,
        maintenance: 0.20,
        brand: 0.10,
        environmental: 0.25,
        purpose_fit: 0.30,
    },
    preferred_body_types: &[],
    preferred_fuel_types: &[FuelType::Hybrid, FuelType::PluginHybrid, FuelType::Electric],
    min_seats: 0,
    price_band: OPEN_BAND,
};

static SPORTY: ProfileSpec = ProfileSpec {
    weights: CriterionWeights {
        price: 0.10,
        fuel_economy: 0.10,
        size: 0.10,
        safety: 0.10,
        maintenance: 0.10,
        brand: 0.15,
        environmental: 0.10,
        purpose_fit: 0.30,
    },
    preferred_body_types: &["オープンカー", "ハッチバック", "セダン"],
    preferred_fuel_types: &[],
    min_seats: 0,
    price_band: OPEN_BAND,
};

/// `general` has no preferences and does not weight purpose fit.
pub const GENERAL_WEIGHTS: CriterionWeights = CriterionWeights {
    price: 0.20,
    fuel_economy: 0.20,
    size: 0.15,
    safety: 0.15,
    maintenance: 0.15,
    brand: 0.10,
    environmental: 0.05,
    purpose_fit: 0.0,
};

impl Profile {
    /// Classification order; also the tie-break order.
    pub const NAMED: [Profile; 5] = [
        Profile::Family,
        Profile::Commuter,
        Profile::Luxury,
        Profile::Eco,
        Profile::Sporty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Profile::Family => "family",
            Profile::Commuter => "commuter",
            Profile::Luxury => "luxury",
            Profile::Eco => "eco",
            Profile::Sporty => "sporty",
            Profile::General => "general",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "family" => Some(Profile::Family),
            "commuter" => Some(Profile::Commuter),
            "luxury" => Some(Profile::Luxury),
            "eco" => Some(Profile::Eco),
            "sporty" => Some(Profile::Sporty),
            "general" | "balance" => Some(Profile::General),
            _ => None,
        }
    }

    pub fn spec(self) -> Option<&'static ProfileSpec> {
        match self {
            Profile::Family => Some(&FAMILY),
            Profile::Commuter => Some(&COMMUTER),
            Profile::Luxury => Some(&LUXURY),
            Profile::Eco => Some(&ECO),
            Profile::Sporty => Some(&SPORTY),
            Profile::General => None,
        }
    }

    pub fn base_weights(self) -> CriterionWeights {
        self.spec()
            .map(|spec| spec.weights)
            .unwrap_or(GENERAL_WEIGHTS)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const DEFAULT_SEATS: u32 = 2;
const HIGH_IMPORTANCE: f64 = 4.0;

/// Rule-accumulated affinity of a payload to each named profile, in
/// `Profile::NAMED` order.
pub fn profile_scores(preferences: &Preferences) -> [(Profile, u32); 5] {
    let seats = preferences.min_seats.unwrap_or(DEFAULT_SEATS);
    let budget = preferences.max_price;
    let wants_body =
        |bodies: &[&str]| preferences.body_types.iter().any(|body| bodies.contains(&body.as_str()));
    let wants_electrified = preferences
        .fuel_types
        .iter()
        .any(|label| FuelType::from_label(label).is_electrified());
    let high = |slider: Slider| preferences.importance.level(slider) >= HIGH_IMPORTANCE;

    let mut family = 0;
    if seats >= 5 {
        family += 30;
    }
    if wants_body(&["ミニバン", "SUV"]) {
        family += 20;
    }
    if budget.is_some_and(|price| price <= 400.0) {
        family += 10;
    }
    if high(Slider::Safety) {
        family += 25;
    }
    if high(Slider::Space) {
        family += 25;
    }

    let mut commuter = 0;
    if budget.is_some_and(|price| price <= 300.0) {
        commuter += 25;
    }
    if wants_body(&["ハッチバック", "軽自動車"]) {
        commuter += 20;
    }
    if high(Slider::FuelEconomy) {
        commuter += 15;
    }
    if high(Slider::Maintenance) {
        commuter += 25;
    }

    let mut luxury = 0;
    if budget.is_some_and(|price| price >= 500.0) {
        luxury += 30;
    }
    if wants_body(&["セダン", "オープンカー"]) {
        luxury += 15;
    }
    if high(Slider::Design) {
        luxury += 30;
    }

    let mut eco = 0;
    if wants_electrified {
        eco += 35;
    }
    if high(Slider::FuelEconomy) {
        eco += 20;
    }
    if high(Slider::Maintenance) {
        eco += 15;
    }

    let mut sporty = 0;
    if wants_body(&["オープンカー"]) {
        sporty += 30;
    }
    if seats <= 4 {
        sporty += 15;
    }

    [
        (Profile::Family, family),
        (Profile::Commuter, commuter),
        (Profile::Luxury, luxury),
        (Profile::Eco, eco),
        (Profile::Sporty, sporty),
    ]
}

/// Picks the profile for a payload. An explicit `user_profile` wins;
/// otherwise the first profile with the highest score is chosen if it clears
/// the threshold, else `general`.
pub fn classify(preferences: &Preferences, config: &ClassifierConfig) -> Profile {
    if let Some(profile) = preferences.user_profile {
        debug!(%profile, "using explicit profile hint");
        return profile;
    }

    let scores = profile_scores(preferences);
    let (best, best_score) = scores
        .iter()
        .fold(scores[0], |best, candidate| {
            if candidate.1 > best.1 {
                *candidate
            } else {
                best
            }
        });

    debug!(?scores, "profile affinity");
    if best_score >= config.min_profile_score {
        best
    } else {
        Profile::General
    }
}
