//! Command-line configuration.
//!
//! Every flag can also be supplied through the environment (a `.env` file in
//! the working directory is loaded first).

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stoich")]
#[command(about = "Count the atoms in chemical formulas", version)]
pub struct Config {
    /// Formulas to parse (e.g. "Fe2(SO4)3" or "CuSO4 * 5H2O"); reads stdin lines when empty
    pub formulas: Vec<String>,

    /// Output rendering
    #[arg(long, value_enum, env = "STOICH_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "STOICH_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit log lines as JSON
    #[arg(long, env = "STOICH_LOG_JSON")]
    pub log_json: bool,

    /// Stop at the first formula that fails to parse
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            anyhow::bail!(
                "invalid log level '{}', expected one of {}",
                self.log_level,
                LEVELS.join(", ")
            );
        }
        Ok(())
    }
}
