//! Hard-constraint pre-stage. Predicates whose record value cannot be parsed
//! are skipped for that record rather than failing it.

use crate::criteria::price::effective_budget;
use crate::profile::Profile;
use crate::types::config::PricingConfig;
use crate::types::preferences::Preferences;
use crate::types::record::VehicleRecord;

fn accepts_exact(accepted: &[String], value: Option<String>) -> bool {
    accepted.is_empty()
        || value.is_some_and(|value| accepted.iter().any(|candidate| *candidate == value))
}

/// Exact match, or the criterion contained in the record value
/// (`4WD` accepts `4WD(AWD)`).
fn accepts_containing(accepted: &[String], value: Option<String>) -> bool {
    accepted.is_empty()
        || value.is_some_and(|value| {
            accepted
                .iter()
                .any(|candidate| *candidate == value || value.contains(candidate.as_str()))
        })
}

pub fn passes(
    record: &VehicleRecord,
    preferences: &Preferences,
    profile: Profile,
    pricing: &PricingConfig,
) -> bool {
    if !accepts_exact(&preferences.body_types, record.body_type()) {
        return false;
    }
    if !accepts_containing(&preferences.drive_types, record.drive_type()) {
        return false;
    }
    if !accepts_containing(&preferences.fuel_types, record.fuel_label()) {
        return false;
    }

    if let (Some(max_price), Some(price)) = (preferences.max_price, record.price(pricing)) {
        if price.min > effective_budget(max_price, record, profile, pricing) {
            return false;
        }
    }
    if let (Some(min_economy), Some(economy)) =
        (preferences.min_fuel_economy, record.fuel_economy())
    {
        if economy < min_economy {
            return false;
        }
    }
    if let (Some(min_seats), Some(seats)) = (preferences.min_seats, record.seating_capacity()) {
        if seats < min_seats {
            return false;
        }
    }

    true
}

/// Records passing every applicable predicate, in input order.
pub fn filter<T: AsRef<VehicleRecord> + Clone>(
    records: &[T],
    preferences: &Preferences,
    profile: Profile,
    pricing: &PricingConfig,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| passes(record.as_ref(), preferences, profile, pricing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> VehicleRecord {
        serde_json::from_value(value).expect("record should deserialize")
    }

    fn catalog() -> Vec<VehicleRecord> {
        vec![
            record(json!({
                "model": "A", "ボディタイプ": "ミニバン", "駆動方式": "4WD(AWD)",
                "燃料の種類": "ガソリン(HEV)", "価格帯(万円)": "320~410", "燃費(km/L)": 19.0,
                "乗車定員": "7名",
            })),
            record(json!({
                "model": "B", "ボディタイプ": "ハッチバック", "駆動方式": "2WD",
                "燃料の種類": "レギュラー", "価格帯(万円)": 250, "燃費(km/L)": 0,
                "乗車定員": "5名",
            })),
            record(json!({
                "model": "C", "ボディタイプ": "SUV", "燃料の種類": "軽油",
                "価格帯(万円)": "不明", "乗車定員": "なし",
            })),
        ]
    }

    fn models(records: &[VehicleRecord]) -> Vec<String> {
        records.iter().filter_map(|r| r.model()).collect()
    }

    fn run(prefs: serde_json::Value, profile: Profile) -> Vec<String> {
        models(&filter(
            &catalog(),
            &Preferences::from(prefs),
            profile,
            &PricingConfig::default(),
        ))
    }

    #[test]
    fn empty_preferences_keep_everything_in_order() {
        assert_eq!(run(json!({}), Profile::General), vec!["A", "B", "C"]);
    }

    #[test]
    fn body_type_is_exact_and_missing_values_fail() {
        assert_eq!(run(json!({ "body_types": ["SUV"] }), Profile::General), vec!["C"]);
        assert_eq!(run(json!({ "drive_types": ["2WD"] }), Profile::General), vec!["B"]);
    }

    #[test]
    fn drive_and_fuel_accept_containment() {
        assert_eq!(run(json!({ "drive_types": ["4WD"] }), Profile::General), vec!["A"]);
        assert_eq!(run(json!({ "fuel_types": ["(HEV)"] }), Profile::General), vec!["A"]);
    }

    #[test]
    fn numeric_predicates_fail_open_on_unparsable_values() {
        assert_eq!(run(json!({ "max_price": 260 }), Profile::General), vec!["B", "C"]);
        assert_eq!(
            run(json!({ "min_fuel_economy": 25 }), Profile::General),
            vec!["B", "C"]
        );
        assert_eq!(run(json!({ "min_seats": 6 }), Profile::General), vec!["A", "C"]);
    }

    #[test]
    fn family_minivans_get_the_inflated_budget() {
        let prefs = json!({ "max_price": 300, "body_types": ["ミニバン"], "min_seats": 5 });
        assert!(run(prefs.clone(), Profile::General).is_empty());
        assert_eq!(run(prefs, Profile::Family), vec!["A"]);
    }
}
