use crate::tables::{self, UNLISTED_MAKER_SAFETY};
use crate::types::record::VehicleRecord;
use crate::types::scoring::{clamp_score, Score};

pub fn safety_score(record: &VehicleRecord) -> Score {
    let equipment = tables::match_safety_equipment(record.safety_equipment().as_deref()).score();
    let maker = record
        .manufacturer()
        .and_then(|maker| tables::maker_safety(&maker))
        .unwrap_or(UNLISTED_MAKER_SAFETY);

    // 70% equipment, 30% maker, in tenths to keep the floor exact
    clamp_score((i64::from(equipment) * 7 + i64::from(maker) * 3) / 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score(value: serde_json::Value) -> Score {
        let record: VehicleRecord =
            serde_json::from_value(value).expect("record should deserialize");
        safety_score(&record)
    }

    #[test]
    fn combines_equipment_and_maker_reputation() {
        // 100 * 0.7 + 95 * 0.3 = 98.5
        assert_eq!(score(json!({ "メーカー": "スバル", "安全装備": "アイサイトX" })), 98);
        // 90 * 0.7 + 90 * 0.3 = 90
        assert_eq!(
            score(json!({ "manufacturer": "トヨタ", "safety_equipment": "Toyota Safety Sense" })),
            90
        );
    }

    #[test]
    fn explicit_no_equipment() {
        // 40 * 0.7 + 78 * 0.3 = 51.4
        assert_eq!(score(json!({ "メーカー": "スズキ", "安全装備": "NO" })), 51);
    }

    #[test]
    fn missing_everything_uses_defaults() {
        // 50 * 0.7 + 75 * 0.3 = 57.5
        assert_eq!(score(json!({})), 57);
    }
}
