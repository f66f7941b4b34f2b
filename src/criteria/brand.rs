use crate::tables::{self, UNLISTED_BRAND_SCORE};
use crate::types::record::VehicleRecord;
use crate::types::scoring::Score;

pub fn brand_score(record: &VehicleRecord) -> Score {
    record
        .manufacturer()
        .and_then(|maker| tables::brand_tier(&maker))
        .map(|tier| tier.score())
        .unwrap_or(UNLISTED_BRAND_SCORE)
}
