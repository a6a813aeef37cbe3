use crate::app::cli::Cli;

pub const DEFAULT_DB_NAME: &str = "maraksh";
/// Fixed data source: every document in this collection is audited.
pub const MENU_ITEMS_COLLECTION: &str = "menuitems";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Left unset when neither flag nor env provides it; connecting then fails.
    pub mongodb_uri: Option<String>,
    /// Defaults to `maraksh`.
    pub db_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: None,
            db_name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

/// Load environment variables from a `.env` file if present.
/// Must run before the CLI is parsed so `env = ...` fallbacks see them.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

pub fn resolve_config(cli: Cli) -> AppConfig {
    let defaults = AppConfig::default();

    let mongodb_uri = cli.mongodb_uri.filter(|uri| !uri.trim().is_empty());

    let db_name = cli
        .db_name
        .filter(|name| !name.is_empty())
        .unwrap_or(defaults.db_name);

    AppConfig {
        mongodb_uri,
        db_name,
    }
}
