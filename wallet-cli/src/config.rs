//! Configuration from flags with environment fallbacks.

use clap::ArgAction;
use clap::builder::BoolishValueParser;

/// How payment and favorite ids are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IdStrategy {
    /// Random UUID v4
    Uuid,
    /// `<prefix>1`, `<prefix>2`, ...
    Sequential,
}

/// Application configuration.
///
/// Each field is a flag; when the flag is absent the matching `WALLET_*`
/// variable is read, then the default applies.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct Config {
    /// Default tracing filter (RUST_LOG takes precedence)
    #[arg(long = "log", env = "WALLET_LOG", default_value = "info")]
    pub log_filter: String,

    /// Emit log lines as JSON
    #[arg(
        long = "log-json",
        env = "WALLET_LOG_JSON",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub log_json: bool,

    /// Id generator for payments and favorites
    #[arg(long = "ids", env = "WALLET_IDS", value_enum, default_value_t = IdStrategy::Uuid)]
    pub id_strategy: IdStrategy,

    /// Prefix for sequential ids
    #[arg(long, env = "WALLET_ID_PREFIX", default_value = "id-")]
    pub id_prefix: String,
}
