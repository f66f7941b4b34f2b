use crate::profile::Profile;
use crate::types::config::PricingConfig;
use crate::types::record::VehicleRecord;
use crate::types::scoring::{clamp_score, Score};

pub const GENERAL_PURPOSE_FIT: Score = 70;
const DEFAULT_SEATS: u32 = 5;
const DEFAULT_PRICE: f64 = 300.0;

pub fn purpose_fit_score(record: &VehicleRecord, profile: Profile, pricing: &PricingConfig) -> Score {
    let Some(spec) = profile.spec() else {
        return GENERAL_PURPOSE_FIT;
    };

    let mut score = 50;
    if record
        .body_type()
        .is_some_and(|body| spec.preferred_body_types.contains(&body.as_str()))
    {
        score += 30;
    }
    if record.seating_capacity().unwrap_or(DEFAULT_SEATS) >= spec.min_seats {
        score += 10;
    }
    let price = record
        .price(pricing)
        .map(|range| range.min)
        .unwrap_or(DEFAULT_PRICE);
    let (low, high) = spec.price_band;
    if (low..=high).contains(&price) {
        score += 15;
    }
    if spec.preferred_fuel_types.contains(&record.fuel_type()) {
        score += 20;
    }
    clamp_score(score)
}
