use clap::{ArgAction, Parser};


#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection string. If not provided, looks for MONGODB_URI env var.
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// Database holding the menu items.
    #[arg(long, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
