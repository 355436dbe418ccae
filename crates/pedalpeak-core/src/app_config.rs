use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory backing the file key-value store (catalog and cart keys).
    pub data_dir: PathBuf,
    /// Bulk title mapping: a filesystem path or an `http(s)://` URL.
    pub bulk_source: String,
    /// Prefix joined with the bulk-source key to form each product's image path.
    pub image_dir: String,
    /// Optional YAML override for the pricing table.
    pub pricing_path: Option<PathBuf>,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}
