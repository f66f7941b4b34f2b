use crate::tables::normalize;
use crate::types::record::VehicleRecord;
use std::collections::HashSet;

/// Normalized `(manufacturer, model)`; `None` when the record names neither.
pub fn dedupe_key(record: &VehicleRecord) -> Option<(String, String)> {
    let manufacturer = record.manufacturer();
    let model = record.model();
    if manufacturer.is_none() && model.is_none() {
        return None;
    }
    Some((
        manufacturer.as_deref().map(normalize).unwrap_or_default(),
        model.as_deref().map(normalize).unwrap_or_default(),
    ))
}

/// Keeps the first record per manufacturer and model, preserving order. Sort
/// by score first so the survivor is the best-scoring trim.
pub fn dedupe<T: AsRef<VehicleRecord>>(records: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| match dedupe_key(record.as_ref()) {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect()
}
