use crate::profile::Profile;
use crate::types::config::PricingConfig;
use crate::types::preferences::Preferences;
use crate::types::record::VehicleRecord;
use crate::types::scoring::{clamp_score, Score};

const UNKNOWN_PRICE: Score = 50;

/// Budget the record is judged against: `max_price` (or the configured
/// default), inflated for minivans under the family profile.
pub fn effective_budget(
    budget: f64,
    record: &VehicleRecord,
    profile: Profile,
    pricing: &PricingConfig,
) -> f64 {
    if profile == Profile::Family && record.is_minivan() {
        budget * pricing.minivan_family_inflation
    } else {
        budget
    }
}

pub fn price_score(
    record: &VehicleRecord,
    preferences: &Preferences,
    profile: Profile,
    pricing: &PricingConfig,
) -> Score {
    let budget = effective_budget(
        preferences.max_price.unwrap_or(pricing.default_budget),
        record,
        profile,
        pricing,
    );
    let price = match record.price(pricing) {
        Some(range) if range.min > 0.0 => range.min,
        _ => return UNKNOWN_PRICE,
    };
    if budget <= 0.0 {
        return 0;
    }

    let ratio = price / budget;
    let score = if price <= budget {
        100.0 - 80.0 * ratio
    } else {
        150.0 - 100.0 * ratio
    };
    clamp_score(score.floor() as i64)
}
