use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub io: IoSettings,
    pub compute: ComputeSettings,
    pub logging: LoggingSettings,
}

/// Where statements are read from and where index documents are written.
#[derive(Debug, Clone, Deserialize)]
pub struct IoSettings {
    /// The structured statement book (JSON, keyed by company code).
    pub input: PathBuf,
    /// The index document to write.
    pub output: PathBuf,
    /// Pretty-print the output JSON.
    pub pretty: bool,
}

/// Controls how a batch of companies is computed.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeSettings {
    /// Compute companies concurrently. Results are identical either way.
    pub parallel: bool,
    /// Worker threads for parallel computation. `None` uses one per CPU core.
    #[serde(default)]
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, e.g. "info" or "indices=debug". `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
    /// When set, logs go to a daily rolling file in this directory instead of stderr.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// File name prefix for rolling log files.
    pub file_prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogFormat {
    Full,
    Compact,
}
