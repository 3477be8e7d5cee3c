/// Loanwise version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Class index the classifier uses for an approved application.
pub const POSITIVE_CLASS: u8 = 1;

/// Class index the classifier uses for a rejected application.
pub const NEGATIVE_CLASS: u8 = 0;

/// Default probability cut-off for artifacts that do not declare one.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.5;

/// Name of the project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILENAME: &str = "loanwise.toml";
