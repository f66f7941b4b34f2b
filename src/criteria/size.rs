use crate::parse;
use crate::types::preferences::Preferences;
use crate::types::record::VehicleRecord;
use crate::types::scoring::{clamp_score, Score};

const UNKNOWN_SIZE: Score = 50;

pub fn size_score(record: &VehicleRecord, preferences: &Preferences) -> Score {
    let Some(length) = record.size().as_deref().and_then(parse::first_dimension) else {
        return UNKNOWN_SIZE;
    };

    let (ideal, range) = preferences.preferred_size.ideal_length();
    let distance = (f64::from(length) - ideal).abs();
    let score = if distance <= range {
        100 - (distance / range * 50.0).floor() as i64
    } else {
        50 - ((distance - range) / 200.0).floor() as i64
    };
    clamp_score(score)
}
