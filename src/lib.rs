//! Deterministic, explainable ranking of vehicle catalogs against buyer
//! preferences.
//!
//! [`engine::RecommendationEngine`] is the entry point: it classifies the
//! preference payload into a [`profile::Profile`], filters the catalog,
//! scores every survivor on eight criteria, reweights them from the
//! importance sliders and attaches a short Japanese explanation.

pub mod catalog;
pub mod config;
pub mod criteria;
pub mod dedupe;
pub mod engine;
pub mod error;
pub mod explain;
pub mod filter;
pub mod parse;
pub mod profile;
pub mod report;
pub mod tables;
pub mod telemetry;
pub mod types;
pub mod weights;
