use crate::parse;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Neutral slider level on the five-point scale.
pub const NEUTRAL_SLIDER: f64 = 3.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "small" | "compact" | "小" => Some(SizeClass::Small),
            "medium" | "中" => Some(SizeClass::Medium),
            "large" | "大" => Some(SizeClass::Large),
            _ => None,
        }
    }

    /// Ideal overall length and tolerated deviation, in millimeters.
    pub fn ideal_length(self) -> (f64, f64) {
        match self {
            SizeClass::Small => (3800.0, 600.0),
            SizeClass::Medium => (4500.0, 700.0),
            SizeClass::Large => (5000.0, 800.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Price,
    FuelEconomy,
    Safety,
    Design,
    Space,
    Maintenance,
}

/// Importance sliders, normalized to [1, 5]. `None` means "not given".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Importance {
    pub price: Option<f64>,
    pub fuel_economy: Option<f64>,
    pub safety: Option<f64>,
    pub design: Option<f64>,
    pub space: Option<f64>,
    pub maintenance: Option<f64>,
}

impl Importance {
    pub fn level(&self, slider: Slider) -> f64 {
        let value = match slider {
            Slider::Price => self.price,
            Slider::FuelEconomy => self.fuel_economy,
            Slider::Safety => self.safety,
            Slider::Design => self.design,
            Slider::Space => self.space,
            Slider::Maintenance => self.maintenance,
        };
        value.unwrap_or(NEUTRAL_SLIDER)
    }
}

/// Maps a raw slider reading onto the five-point scale: fractions in [0, 1)
/// are scaled by 5, then everything is clamped to [1, 5]. A reading of
/// exactly 1 is the lowest five-point level.
pub fn normalize_slider(raw: f64) -> f64 {
    let scaled = if (0.0..1.0).contains(&raw) {
        raw * 5.0
    } else {
        raw
    };
    scaled.clamp(1.0, 5.0)
}

/// Typed view of a preference payload. Unrecognized keys are ignored and
/// malformed values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Preferences {
    pub body_types: Vec<String>,
    pub drive_types: Vec<String>,
    pub fuel_types: Vec<String>,
    pub max_price: Option<f64>,
    pub min_fuel_economy: Option<f64>,
    pub min_seats: Option<u32>,
    pub preferred_size: SizeClass,
    pub importance: Importance,
    pub user_profile: Option<Profile>,
}

impl Preferences {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            body_types: string_list(map, "body_types"),
            drive_types: string_list(map, "drive_types"),
            fuel_types: string_list(map, "fuel_types"),
            max_price: number(map, "max_price"),
            min_fuel_economy: number(map, "min_fuel_economy"),
            min_seats: integer(map, "min_seats"),
            preferred_size: map
                .get("preferred_size")
                .and_then(|value| {
                    let parsed = value.as_str().and_then(SizeClass::from_name);
                    if parsed.is_none() && !value.is_null() {
                        debug!(key = "preferred_size", %value, "ignoring malformed preference");
                    }
                    parsed
                })
                .unwrap_or_default(),
            importance: Importance {
                price: slider(map, "price_importance"),
                fuel_economy: slider(map, "fuel_economy_importance"),
                safety: slider(map, "safety_importance"),
                design: slider(map, "design_importance"),
                space: slider(map, "space_importance"),
                maintenance: slider(map, "maintenance_importance"),
            },
            user_profile: map.get("user_profile").and_then(|value| {
                let parsed = value.as_str().and_then(Profile::from_name);
                if parsed.is_none() && !value.is_null() {
                    debug!(key = "user_profile", %value, "unknown profile hint, inferring instead");
                }
                parsed
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Value> for Preferences {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(&map),
            Value::Null => Self::default(),
            other => {
                debug!(payload = %other, "preference payload is not an object");
                Self::default()
            }
        }
    }
}

fn string_list(map: &Map<String, Value>, key: &str) -> Vec<String> {
    let to_text = |value: &Value| match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };

    match map.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(to_text).collect(),
        Some(value) => match to_text(value) {
            Some(item) => vec![item],
            None => {
                debug!(key, %value, "ignoring malformed preference");
                Vec::new()
            }
        },
    }
}

fn number(map: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = map.get(key).filter(|value| !is_blank(value))?;
    let parsed = parse::number(value);
    if parsed.is_none() {
        debug!(key, %value, "ignoring malformed preference");
    }
    parsed
}

fn integer(map: &Map<String, Value>, key: &str) -> Option<u32> {
    let value = map.get(key).filter(|value| !is_blank(value))?;
    let parsed = parse::first_integer(value);
    if parsed.is_none() {
        debug!(key, %value, "ignoring malformed preference");
    }
    parsed
}

fn slider(map: &Map<String, Value>, key: &str) -> Option<f64> {
    number(map, key).map(normalize_slider)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
