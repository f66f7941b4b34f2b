use crate::types::record::{FuelType, VehicleRecord};
use crate::types::scoring::{clamp_score, Score};

fn base_score(fuel: FuelType) -> i64 {
    match fuel {
        FuelType::Electric => 100,
        FuelType::PluginHybrid => 85,
        FuelType::Hybrid => 80,
        FuelType::Diesel => 60,
        FuelType::Gasoline | FuelType::Unknown => 40,
    }
}

pub fn environmental_score(record: &VehicleRecord) -> Score {
    let fuel = record.fuel_type();
    let mut score = base_score(fuel);
    if fuel != FuelType::Electric {
        if let Some(economy) = record.fuel_economy() {
            score += (((economy - 10.0) * 2.0).trunc() as i64).min(20);
        }
    }
    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score(value: serde_json::Value) -> Score {
        let record: VehicleRecord =
            serde_json::from_value(value).expect("record should deserialize");
        environmental_score(&record)
    }

    #[test]
    fn economy_adjusts_non_electric_base() {
        assert_eq!(score(json!({ "fuel_type": "(HEV)", "fuel_economy": 32.6 })), 100);
        assert_eq!(score(json!({ "fuel_type": "ガソリン", "fuel_economy": 15 })), 50);
        assert_eq!(score(json!({ "fuel_type": "ガソリン", "fuel_economy": 6 })), 32);
    }

    #[test]
    fn fractional_shortfall_truncates_toward_zero() {
        assert_eq!(score(json!({ "fuel_type": "ガソリン", "fuel_economy": 9.7 })), 40);
        assert_eq!(score(json!({ "fuel_type": "ガソリン", "fuel_economy": 9.2 })), 39);
        assert_eq!(score(json!({ "fuel_type": "(HEV)", "fuel_economy": 10.4 })), 80);
    }

    #[test]
    fn electric_and_unknown_economy_use_base_only() {
        assert_eq!(score(json!({ "fuel_type": "EV", "fuel_economy": 3 })), 100);
        assert_eq!(score(json!({ "fuel_type": "軽油" })), 60);
        assert_eq!(score(json!({})), 40);
    }
}
