use crate::types::record::{FuelType, VehicleRecord};
use crate::types::scoring::{clamp_score, Score};

const DEFAULT_TAX: f64 = 50_000.0;
const DEFAULT_DISPLACEMENT: f64 = 1_500.0;

fn fuel_bonus(fuel: FuelType) -> i64 {
    match fuel {
        FuelType::Electric => 20,
        FuelType::Hybrid => 15,
        FuelType::PluginHybrid => 10,
        FuelType::Diesel => 5,
        FuelType::Gasoline | FuelType::Unknown => 0,
    }
}

pub fn maintenance_score(record: &VehicleRecord) -> Score {
    let tax = record.annual_tax().unwrap_or(DEFAULT_TAX);
    let displacement = record.displacement().unwrap_or(DEFAULT_DISPLACEMENT);

    let tax_score = (100 - (tax / 1000.0).floor() as i64).max(0);
    let displacement_score = (100 - (displacement / 50.0).floor() as i64).max(0);

    clamp_score((tax_score + displacement_score) / 2 + fuel_bonus(record.fuel_type()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score(value: serde_json::Value) -> Score {
        let record: VehicleRecord =
            serde_json::from_value(value).expect("record should deserialize");
        maintenance_score(&record)
    }

    #[test]
    fn kei_car_is_cheap_to_keep() {
        // tax 90, displacement 87 -> 88
        assert_eq!(
            score(json!({ "自動車税(円)": 10800, "排気量": 658, "燃料の種類": "ガソリン" })),
            88
        );
    }

    #[test]
    fn fuel_bonus_is_added_and_clamped() {
        // tax 75, displacement 65 -> 70 + 15
        assert_eq!(
            score(json!({ "annual_tax": "25,000円", "displacement": 1797, "fuel_type": "(HEV)" })),
            85
        );
        assert_eq!(
            score(json!({ "annual_tax": 0, "displacement": 0, "fuel_type": "EV" })),
            100
        );
    }

    #[test]
    fn defaults_apply_to_missing_fields() {
        // tax 50, displacement 70 -> 60
        assert_eq!(score(json!({})), 60);
    }
}
