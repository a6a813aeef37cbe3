//! Menu image audit
//!
//! Connects to MongoDB, reads every menu item, and reports how many images
//! come from GridFS, from the public folder, or are missing.
//!
//! Exit codes:
//!   0 - Report printed
//!   1 - Connection or query failure (logged to stderr)

use menu_image_audit::app::{self, cli::Cli};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() {
    let args = app::parse_args();

    init_logging(&args);

    if let Err(e) = app::run(args).await {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so the report on stdout stays clean. `RUST_LOG` wins over -v.
fn init_logging(args: &Cli) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level()).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
