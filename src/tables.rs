//! Process-wide lookup tables shared by the scorers and the explainer.
//!
//! Keys are stored normalized (trimmed, upper-cased) so lookups are
//! case-insensitive for Latin manufacturer names.

use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandTier {
    Premium,
    Mainstream,
    Value,
    Specialty,
}

impl BrandTier {
    pub fn score(self) -> u8 {
        match self {
            BrandTier::Premium => 95,
            BrandTier::Specialty => 90,
            BrandTier::Mainstream => 85,
            BrandTier::Value => 75,
        }
    }
}

pub const UNLISTED_BRAND_SCORE: u8 = 70;

const BRANDS: &[(BrandTier, &[&str])] = &[
    (
        BrandTier::Premium,
        &["レクサス", "メルセデス・ベンツ", "BMW", "アウディ", "ボルボ"],
    ),
    (
        BrandTier::Mainstream,
        &["トヨタ", "ホンダ", "日産", "マツダ", "スバル"],
    ),
    (BrandTier::Value, &["ダイハツ", "スズキ", "三菱"]),
    (BrandTier::Specialty, &["テスラ", "ポルシェ", "フェラーリ"]),
];

static BRAND_TIERS: LazyLock<HashMap<String, BrandTier>> = LazyLock::new(|| {
    BRANDS
        .iter()
        .flat_map(|(tier, makers)| makers.iter().map(move |maker| (normalize(maker), *tier)))
        .collect()
});

pub const UNLISTED_MAKER_SAFETY: u8 = 75;

const MAKER_SAFETY: &[(&str, u8)] = &[
    ("ボルボ", 100),
    ("スバル", 95),
    ("レクサス", 95),
    ("メルセデス・ベンツ", 95),
    ("テスラ", 92),
    ("トヨタ", 90),
    ("BMW", 90),
    ("アウディ", 90),
    ("ホンダ", 88),
    ("マツダ", 88),
    ("日産", 85),
    ("ポルシェ", 85),
    ("三菱", 80),
    ("ダイハツ", 78),
    ("スズキ", 78),
];

static MAKER_SAFETY_SCORES: LazyLock<HashMap<String, u8>> = LazyLock::new(|| {
    MAKER_SAFETY
        .iter()
        .map(|(maker, score)| (normalize(maker), *score))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyTier {
    /// Latest-generation suites with hands-off or 360-degree sensing.
    Advanced,
    Standard,
    Assist,
    /// Automatic emergency braking only.
    Basic,
}

impl SafetyTier {
    pub fn score(self) -> u8 {
        match self {
            SafetyTier::Advanced => 100,
            SafetyTier::Standard => 90,
            SafetyTier::Assist => 85,
            SafetyTier::Basic => 50,
        }
    }
}

/// How a safety-equipment label was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentMatch {
    Tier(SafetyTier),
    /// A non-empty label that is not in the table.
    Unrecognized,
    Missing,
    /// The catalog states explicitly that nothing is fitted.
    NoEquipment,
}

impl EquipmentMatch {
    pub fn score(self) -> u8 {
        match self {
            EquipmentMatch::Tier(tier) => tier.score(),
            EquipmentMatch::Unrecognized => 80,
            EquipmentMatch::Missing => 50,
            EquipmentMatch::NoEquipment => 40,
        }
    }
}

const SAFETY_EQUIPMENT: &[(SafetyTier, &[&str])] = &[
    (
        SafetyTier::Advanced,
        &[
            "アイサイトX",
            "Toyota Safety Sense(第3世代)",
            "Honda SENSING 360",
            "プロパイロット2.0",
            "Lexus Safety System+ 3.0",
        ],
    ),
    (
        SafetyTier::Standard,
        &[
            "アイサイト",
            "EyeSight",
            "Toyota Safety Sense",
            "Honda SENSING",
            "プロパイロット",
            "i-ACTIVSENSE",
            "Lexus Safety System+",
        ],
    ),
    (
        SafetyTier::Assist,
        &[
            "スマートアシスト",
            "スズキ セーフティ サポート",
            "e-Assist",
            "インテリジェント エマージェンシーブレーキ",
        ],
    ),
    (SafetyTier::Basic, &["衝突被害軽減ブレーキ", "AEB"]),
];

const NO_EQUIPMENT_LABELS: [&str; 4] = ["NO", "なし", "無し", "NONE"];

const MISSING_LABELS: [&str; 5] = ["不明", "未定", "UNKNOWN", "-", "N/A"];

static SAFETY_EXACT: LazyLock<HashMap<String, SafetyTier>> = LazyLock::new(|| {
    SAFETY_EQUIPMENT
        .iter()
        .flat_map(|(tier, labels)| labels.iter().map(move |label| (normalize(label), *tier)))
        .collect()
});

/// Substring candidates, most specific (longest) key first so that
/// `アイサイトX` wins over `アイサイト`.
static SAFETY_BY_SPECIFICITY: LazyLock<Vec<(String, SafetyTier)>> = LazyLock::new(|| {
    let mut keys: Vec<(String, SafetyTier)> = SAFETY_EXACT
        .iter()
        .map(|(label, tier)| (label.clone(), *tier))
        .collect();
    keys.sort_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(&b.0))
    });
    keys
});

pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn brand_tier(manufacturer: &str) -> Option<BrandTier> {
    BRAND_TIERS.get(&normalize(manufacturer)).copied()
}

pub fn maker_safety(manufacturer: &str) -> Option<u8> {
    MAKER_SAFETY_SCORES.get(&normalize(manufacturer)).copied()
}

pub fn match_safety_equipment(label: Option<&str>) -> EquipmentMatch {
    let normalized = match label.map(normalize) {
        Some(normalized) if !normalized.is_empty() => normalized,
        _ => return EquipmentMatch::Missing,
    };

    if NO_EQUIPMENT_LABELS.contains(&normalized.as_str()) {
        return EquipmentMatch::NoEquipment;
    }
    if MISSING_LABELS.contains(&normalized.as_str()) {
        return EquipmentMatch::Missing;
    }
    if let Some(tier) = SAFETY_EXACT.get(&normalized) {
        return EquipmentMatch::Tier(*tier);
    }

    SAFETY_BY_SPECIFICITY
        .iter()
        .find(|(key, _)| normalized.contains(key.as_str()))
        .map(|(_, tier)| EquipmentMatch::Tier(*tier))
        .unwrap_or(EquipmentMatch::Unrecognized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_lookup_is_case_normalized() {
        assert_eq!(brand_tier("bmw"), Some(BrandTier::Premium));
        assert_eq!(brand_tier(" トヨタ "), Some(BrandTier::Mainstream));
        assert_eq!(brand_tier("テスラ"), Some(BrandTier::Specialty));
        assert_eq!(brand_tier("光岡"), None);
    }

    #[test]
    fn maker_safety_defaults_are_absent_for_unlisted() {
        assert_eq!(maker_safety("スバル"), Some(95));
        assert_eq!(maker_safety("光岡"), None);
    }

    #[test]
    fn safety_equipment_prefers_exact_match() {
        assert_eq!(
            match_safety_equipment(Some("アイサイトX")),
            EquipmentMatch::Tier(SafetyTier::Advanced)
        );
        assert_eq!(
            match_safety_equipment(Some("toyota safety sense")),
            EquipmentMatch::Tier(SafetyTier::Standard)
        );
    }

    #[test]
    fn safety_equipment_substring_uses_most_specific_key() {
        assert_eq!(
            match_safety_equipment(Some("アイサイトX(ツーリングアシスト付)")),
            EquipmentMatch::Tier(SafetyTier::Advanced)
        );
        assert_eq!(
            match_safety_equipment(Some("新世代アイサイト")),
            EquipmentMatch::Tier(SafetyTier::Standard)
        );
        assert_eq!(
            match_safety_equipment(Some("スマートアシスト搭載")),
            EquipmentMatch::Tier(SafetyTier::Assist)
        );
    }

    #[test]
    fn safety_equipment_fallbacks() {
        assert_eq!(
            match_safety_equipment(Some("独自の安全パッケージ")),
            EquipmentMatch::Unrecognized
        );
        assert_eq!(match_safety_equipment(Some("不明")), EquipmentMatch::Missing);
        assert_eq!(match_safety_equipment(None), EquipmentMatch::Missing);
        assert_eq!(match_safety_equipment(Some("  ")), EquipmentMatch::Missing);
        assert_eq!(match_safety_equipment(Some("NO")), EquipmentMatch::NoEquipment);
        assert_eq!(match_safety_equipment(Some("no")), EquipmentMatch::NoEquipment);
        assert_eq!(EquipmentMatch::NoEquipment.score(), 40);
        assert_eq!(EquipmentMatch::Unrecognized.score(), 80);
    }
}
