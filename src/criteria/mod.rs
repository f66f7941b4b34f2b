pub mod brand;
pub mod environmental;
pub mod fuel_economy;
pub mod maintenance;
pub mod price;
pub mod purpose_fit;
pub mod safety;
pub mod size;

use crate::profile::Profile;
use crate::types::config::PricingConfig;
use crate::types::preferences::Preferences;
use crate::types::record::VehicleRecord;
use crate::types::scoring::DetailedScores;

/// Runs every criterion scorer against one record.
pub fn detailed_scores(
    record: &VehicleRecord,
    preferences: &Preferences,
    profile: Profile,
    pricing: &PricingConfig,
) -> DetailedScores {
    DetailedScores {
        price: price::price_score(record, preferences, profile, pricing),
        fuel_economy: fuel_economy::fuel_economy_score(record),
        size: size::size_score(record, preferences),
        safety: safety::safety_score(record),
        maintenance: maintenance::maintenance_score(record),
        brand: brand::brand_score(record),
        environmental: environmental::environmental_score(record),
        purpose_fit: purpose_fit::purpose_fit_score(record, profile, pricing),
    }
}
