use crate::types::record::{FuelType, VehicleRecord};
use crate::types::scoring::{clamp_score, Score};

pub const ELECTRIC_SCORE: Score = 95;
const UNKNOWN_ECONOMY: Score = 30;
const FLOOR: Score = 10;

pub fn fuel_economy_score(record: &VehicleRecord) -> Score {
    let fuel = record.fuel_type();
    if fuel == FuelType::Electric {
        return ELECTRIC_SCORE;
    }
    let Some(economy) = record.fuel_economy() else {
        return UNKNOWN_ECONOMY;
    };

    let factor = match fuel {
        FuelType::Hybrid | FuelType::PluginHybrid if !record.is_minivan() => 4.0,
        _ => 5.0,
    };
    clamp_score((economy * factor).floor() as i64).max(FLOOR)
}
