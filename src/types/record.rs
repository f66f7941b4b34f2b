use crate::parse::{self, PriceRange};
use crate::types::config::PricingConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Accepted keys per attribute: canonical name first, then catalog labels.
pub mod keys {
    pub const MANUFACTURER: &[&str] = &["manufacturer", "メーカー"];
    pub const MODEL: &[&str] = &["model", "車種"];
    pub const BODY_TYPE: &[&str] = &["body_type", "ボディタイプ"];
    pub const DRIVE_TYPE: &[&str] = &["drive_type", "駆動方式"];
    pub const PRICE: &[&str] = &["price", "価格帯(万円)", "価格(万円)"];
    pub const FUEL_ECONOMY: &[&str] = &["fuel_economy", "燃費(km/L)"];
    pub const FUEL_TYPE: &[&str] = &["fuel_type", "燃料の種類"];
    pub const DISPLACEMENT: &[&str] = &["displacement", "排気量"];
    pub const SEATING_CAPACITY: &[&str] = &["seating_capacity", "乗車定員"];
    pub const ANNUAL_TAX: &[&str] = &["annual_tax", "自動車税(円)"];
    pub const SAFETY_EQUIPMENT: &[&str] = &["safety_equipment", "安全装備", "先進安全装備"];
    pub const SIZE: &[&str] = &["size", "サイズ(mm)"];
    pub const SAFETY_RATING: &[&str] = &["safety_rating", "安全評価"];
}

const MINIVAN_LABELS: [&str; 2] = ["ミニバン", "MINIVAN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Electric,
    PluginHybrid,
    Hybrid,
    Diesel,
    Gasoline,
    Unknown,
}

impl FuelType {
    /// Rules are checked in order; `PHEV` must precede `HEV`, which must
    /// precede `EV`.
    pub fn from_label(label: &str) -> Self {
        let upper = label.trim().to_uppercase();
        let has = |needles: &[&str]| needles.iter().any(|needle| upper.contains(needle));

        if has(&["PHEV", "プラグイン"]) {
            FuelType::PluginHybrid
        } else if has(&["HEV", "ハイブリッド", "HYBRID"]) {
            FuelType::Hybrid
        } else if has(&["EV", "電気", "ELECTRIC"]) {
            FuelType::Electric
        } else if has(&["ディーゼル", "軽油", "DIESEL"]) {
            FuelType::Diesel
        } else if has(&["ガソリン", "レギュラー", "ハイオク", "GASOLINE", "PETROL"]) {
            FuelType::Gasoline
        } else {
            FuelType::Unknown
        }
    }

    pub fn is_electrified(self) -> bool {
        matches!(
            self,
            FuelType::Electric | FuelType::PluginHybrid | FuelType::Hybrid
        )
    }
}

/// One catalog row as handed over by the loader. Nothing is guaranteed to be
/// present; accessors return `None` for missing or malformed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleRecord {
    fields: Map<String, Value>,
}

impl VehicleRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn field(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|value| !value.is_null())
    }

    fn text(&self, keys: &[&str]) -> Option<String> {
        match self.field(keys)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn manufacturer(&self) -> Option<String> {
        self.text(keys::MANUFACTURER)
    }

    pub fn model(&self) -> Option<String> {
        self.text(keys::MODEL)
    }

    pub fn body_type(&self) -> Option<String> {
        self.text(keys::BODY_TYPE)
    }

    pub fn drive_type(&self) -> Option<String> {
        self.text(keys::DRIVE_TYPE)
    }

    pub fn fuel_label(&self) -> Option<String> {
        self.text(keys::FUEL_TYPE)
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_label()
            .map(|label| FuelType::from_label(&label))
            .unwrap_or(FuelType::Unknown)
    }

    pub fn safety_equipment(&self) -> Option<String> {
        self.text(keys::SAFETY_EQUIPMENT)
    }

    pub fn size(&self) -> Option<String> {
        self.text(keys::SIZE)
    }

    /// Price in 万円 after unit detection.
    pub fn price(&self, pricing: &PricingConfig) -> Option<PriceRange> {
        self.field(keys::PRICE)
            .and_then(parse::price_range)
            .map(|range| range.normalized(pricing.unit_threshold, pricing.unit_divisor))
    }

    /// km/L; zero and negative readings mean "unknown".
    pub fn fuel_economy(&self) -> Option<f64> {
        self.field(keys::FUEL_ECONOMY)
            .and_then(parse::number)
            .filter(|value| *value > 0.0)
    }

    pub fn displacement(&self) -> Option<f64> {
        self.field(keys::DISPLACEMENT)
            .and_then(parse::number)
            .filter(|value| *value >= 0.0)
    }

    pub fn annual_tax(&self) -> Option<f64> {
        self.field(keys::ANNUAL_TAX)
            .and_then(parse::number)
            .filter(|value| *value >= 0.0)
    }

    pub fn seating_capacity(&self) -> Option<u32> {
        self.field(keys::SEATING_CAPACITY)
            .and_then(parse::first_integer)
    }

    pub fn safety_rating(&self) -> Option<f64> {
        self.field(keys::SAFETY_RATING)
            .and_then(parse::number)
            .filter(|value| (1.0..=5.0).contains(value))
    }

    pub fn is_minivan(&self) -> bool {
        self.body_type()
            .map(|body| {
                let upper = body.to_uppercase();
                MINIVAN_LABELS.iter().any(|label| upper.contains(label))
            })
            .unwrap_or(false)
    }
}

impl From<Map<String, Value>> for VehicleRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl AsRef<VehicleRecord> for VehicleRecord {
    fn as_ref(&self) -> &VehicleRecord {
        self
    }
}
