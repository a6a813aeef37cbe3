pub mod app;

// Re-export useful types for library users
pub use app::classifier::{MAX_SAMPLES, classify, tally};
pub use app::config::AppConfig;
pub use app::error::AuditError;
pub use app::formatter::OutputGenerator;
pub use app::generate_report;
pub use app::inspector::{Inspector, MenuStore, MongoStore, audit_collection};
pub use app::models::{ClassificationResult, ImageSource, MenuItem, Sample};
