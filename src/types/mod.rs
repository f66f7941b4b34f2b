pub mod config;
pub mod preferences;
pub mod record;
pub mod report;
pub mod scoring;
