use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutorecError {
    #[error("catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("preferences file not found: {0}")]
    PreferencesNotFound(String),

    #[error("preferences parse error: {0}")]
    PreferencesParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AutorecError>;
