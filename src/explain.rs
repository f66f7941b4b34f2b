//! Short Japanese justification built from the strongest criteria.

use crate::profile::Profile;
use crate::tables::{self, BrandTier, EquipmentMatch, SafetyTier};
use crate::types::config::ExplainConfig;
use crate::types::record::{FuelType, VehicleRecord};
use crate::types::scoring::{DetailedScores, Score};

pub const HIGH_SCORE: Score = 80;
pub const TOP_SAFETY: Score = 90;
/// Highest annual tax, in yen, still cited as cheap upkeep.
pub const LOW_TAX: f64 = 15_000.0;
pub const FALLBACK_REASON: &str = "総合的にバランスの取れた良い車です";

fn safety_callout(record: &VehicleRecord, scores: &DetailedScores) -> Option<String> {
    if scores.safety < TOP_SAFETY {
        return None;
    }
    let label = record.safety_equipment()?;
    match tables::match_safety_equipment(Some(&label)) {
        EquipmentMatch::Tier(SafetyTier::Advanced) => Some(format!(
            "最新の先進安全装備（{label}）を搭載し、最高水準の安全性を備えています"
        )),
        _ => None,
    }
}

fn fuel_economy_reason(record: &VehicleRecord) -> String {
    let economy = record.fuel_economy().unwrap_or_default();
    match record.fuel_type() {
        FuelType::Electric => {
            "電気自動車なので環境に優しく、ランニングコストも抑えられます".to_string()
        }
        FuelType::Hybrid | FuelType::PluginHybrid => {
            format!("優れた燃費性能（{economy}km/L）で経済的です")
        }
        _ => format!("燃費が良好（{economy}km/L）で日常使いに経済的です"),
    }
}

fn safety_reason(record: &VehicleRecord) -> String {
    match record.safety_rating() {
        Some(rating) => format!("高い安全評価（{rating}/5）を獲得しており、安心して運転できます"),
        None => "充実した安全装備とメーカーの実績で、安心して運転できます".to_string(),
    }
}

fn maintenance_reason(record: &VehicleRecord) -> Option<String> {
    let tax = record.annual_tax().filter(|tax| *tax <= LOW_TAX)?;
    Some(format!("維持費が安く、年間の自動車税も{tax:.0}円に抑えられます"))
}

fn brand_reason(record: &VehicleRecord) -> Option<String> {
    let tier = record
        .manufacturer()
        .and_then(|maker| tables::brand_tier(&maker))?;
    let reason = match tier {
        BrandTier::Premium => "プレミアムブランドならではの品質と信頼性があります",
        BrandTier::Mainstream => "信頼性の高い国産メーカーで、アフターサービスも充実しています",
        BrandTier::Specialty => "独自の技術と個性が光る、こだわりのブランドです",
        BrandTier::Value => return None,
    };
    Some(reason.to_string())
}

fn purpose_reason(profile: Profile) -> Option<String> {
    let reason = match profile {
        Profile::Family => "ファミリー用途に最適な装備と空間を備えています",
        Profile::Commuter => "通勤利用に適したコンパクトサイズと経済性を兼ね備えています",
        Profile::Luxury => "上質な乗り心地とステータス性を求める方にふさわしい一台です",
        Profile::Eco => "環境性能に優れ、エコ志向の方におすすめです",
        Profile::Sporty => "走る楽しさを存分に味わえるスポーティな一台です",
        Profile::General => return None,
    };
    Some(reason.to_string())
}

/// Every qualifying reason in priority order, before truncation.
pub fn reasons(record: &VehicleRecord, scores: &DetailedScores, profile: Profile) -> Vec<String> {
    let mut reasons = Vec::new();

    let callout = safety_callout(record, scores);
    let called_out = callout.is_some();
    reasons.extend(callout);

    if scores.fuel_economy >= HIGH_SCORE {
        reasons.push(fuel_economy_reason(record));
    }
    if scores.safety >= HIGH_SCORE && !called_out {
        reasons.push(safety_reason(record));
    }
    if scores.maintenance >= HIGH_SCORE {
        reasons.extend(maintenance_reason(record));
    }
    if scores.brand >= HIGH_SCORE {
        reasons.extend(brand_reason(record));
    }
    if scores.purpose_fit >= HIGH_SCORE {
        reasons.extend(purpose_reason(profile));
    }

    reasons
}

pub fn explain(
    record: &VehicleRecord,
    scores: &DetailedScores,
    profile: Profile,
    config: &ExplainConfig,
) -> String {
    let mut reasons = reasons(record, scores, profile);
    if reasons.is_empty() {
        return FALLBACK_REASON.to_string();
    }
    reasons.truncate(config.max_reasons.max(1));
    reasons.join(&config.delimiter)
}
