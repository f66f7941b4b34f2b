pub mod json;
pub mod md;

use crate::error::AutorecError;
use crate::types::report::RankingReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &RankingReport, format: OutputFormat) -> Result<String, AutorecError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AutorecError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
