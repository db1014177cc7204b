pub mod app_config;
pub mod config;
pub mod listing;
pub mod numeric;
pub mod paths;
pub mod store;

pub use app_config::{AppConfig, ReportVariant};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{ListingRecord, LISTING_COLUMNS};
pub use numeric::{digits_or_zero, parse_decimal_or_zero, parse_float_or_zero, parse_int_or_zero};
pub use paths::OutputPaths;
pub use store::{StoreRecord, StoreTable};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
