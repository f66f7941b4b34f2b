//! Small fallible parsers for numbers embedded in catalog strings.
//!
//! Every parser returns `None` on failure; callers pick the default that fits
//! their rule.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("static regex"));

static RE_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("static regex"));

/// Leading length of an `L×W×H` size string.
static RE_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[×xX]").expect("static regex"));

/// Price as a `min..=max` span in whatever unit the catalog used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Converts raw yen into 万円 when the minimum exceeds `threshold`.
    pub fn normalized(self, threshold: f64, divisor: f64) -> Self {
        if self.min > threshold && divisor > 0.0 {
            Self {
                min: self.min / divisor,
                max: self.max / divisor,
            }
        } else {
            self
        }
    }
}

/// Grammar: a JSON number, or a string whose first decimal literal is taken
/// after removing thousands separators (`"32.6km/L"`, `"34,500円"`).
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => number_str(s),
        _ => None,
    }
}

pub fn number_str(raw: &str) -> Option<f64> {
    let cleaned = raw.replace([',', '，'], "");
    RE_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Grammar: the first run of ASCII digits (`"5名"` -> 5). Whole JSON numbers
/// are accepted directly; fractional or negative numbers are rejected.
pub fn first_integer(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|v| v.fract() == 0.0 && *v >= 0.0)
                    .map(|v| v as u64)
            })
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => RE_INTEGER
            .find(s)
            .and_then(|m| m.as_str().parse::<u32>().ok()),
        _ => None,
    }
}

/// Grammar: `number` or `number ("~" | "～") number`, with optional `万円` /
/// `円` suffixes and thousands separators. A reversed range is reordered.
pub fn price_range(value: &Value) -> Option<PriceRange> {
    match value {
        Value::Number(_) => number(value).map(|v| PriceRange { min: v, max: v }),
        Value::String(s) => price_range_str(s),
        _ => None,
    }
}

pub fn price_range_str(raw: &str) -> Option<PriceRange> {
    let mut parts = raw.split(['~', '～']);
    let low = parts.next().and_then(number_str)?;
    let high = match parts.next() {
        Some(part) => number_str(part)?,
        None => low,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(PriceRange {
        min: low.min(high),
        max: low.max(high),
    })
}

/// Grammar: `L [×xX] W [×xX] H`; only the leading length (mm) is returned.
pub fn first_dimension(raw: &str) -> Option<u32> {
    RE_LENGTH
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_accepts_numbers_and_embedded_strings() {
        assert_eq!(number(&json!(32.6)), Some(32.6));
        assert_eq!(number(&json!("32.6km/L")), Some(32.6));
        assert_eq!(number(&json!("34,500円")), Some(34500.0));
        assert_eq!(number(&json!("不明")), None);
        assert_eq!(number(&json!(null)), None);
    }

    #[test]
    fn first_integer_extracts_seat_counts() {
        assert_eq!(first_integer(&json!("5名")), Some(5));
        assert_eq!(first_integer(&json!("乗車定員 7人")), Some(7));
        assert_eq!(first_integer(&json!(8)), Some(8));
        assert_eq!(first_integer(&json!(4.5)), None);
        assert_eq!(first_integer(&json!("なし")), None);
    }

    #[test]
    fn price_range_parses_scalars_and_ranges() {
        assert_eq!(
            price_range(&json!(250)),
            Some(PriceRange {
                min: 250.0,
                max: 250.0
            })
        );
        assert_eq!(
            price_range(&json!("120~160")),
            Some(PriceRange {
                min: 120.0,
                max: 160.0
            })
        );
        assert_eq!(
            price_range(&json!("5,100,000～10,650,000円")),
            Some(PriceRange {
                min: 5_100_000.0,
                max: 10_650_000.0
            })
        );
        assert_eq!(price_range(&json!("~")), None);
        assert_eq!(price_range(&json!("1~2~3")), None);
    }

    #[test]
    fn price_range_normalizes_raw_yen() {
        let raw = PriceRange {
            min: 5_100_000.0,
            max: 10_650_000.0,
        };
        let normalized = raw.normalized(10_000.0, 10_000.0);
        assert_eq!(normalized.min, 510.0);
        assert_eq!(normalized.max, 1065.0);

        let already = PriceRange {
            min: 250.0,
            max: 300.0,
        };
        assert_eq!(already.normalized(10_000.0, 10_000.0), already);
    }

    #[test]
    fn first_dimension_reads_length() {
        assert_eq!(first_dimension("4600×1800×1450"), Some(4600));
        assert_eq!(first_dimension("3395 x 1475 x 1785"), Some(3395));
        assert_eq!(first_dimension("4600"), None);
        assert_eq!(first_dimension(""), None);
    }
}
