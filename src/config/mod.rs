pub mod traits;
pub mod evolution;
pub mod reporting;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use reporting::ReportingConfig;
