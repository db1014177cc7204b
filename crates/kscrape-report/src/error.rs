use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to load {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("input is missing required column \"{column}\"")]
    MissingColumn { column: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("font {path} is unusable: {reason}")]
    Font { path: String, reason: String },

    #[error("failed to render {chart}: {reason}")]
    Chart { chart: &'static str, reason: String },

    #[error("failed to prepare chart directory: {0}")]
    Output(#[from] kscrape_core::ConfigError),
}
