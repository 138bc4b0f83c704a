//! Command-line interface parsing for GameStore
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a `StartupConfig` the application is built from.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::gateway::{GatewayConfig, DEFAULT_FRESHNESS_WINDOW};
use crate::prefs::Theme;

/// Products shown when `--products` is not given
pub const DEFAULT_PRODUCT_LIMIT: u32 = 20;

/// User cards shown when `--users` is not given
pub const DEFAULT_USER_COUNT: u32 = 6;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified theme name is not recognized
    #[error("Invalid theme: '{0}'. Valid themes: dark, light")]
    InvalidTheme(String),

    /// A zero timeout would fail every request
    #[error("Invalid timeout: must be at least 1 second")]
    InvalidTimeout,
}

/// GameStore - browse the game store catalog from your terminal
#[derive(Parser, Debug)]
#[command(name = "gamestore")]
#[command(about = "Browse GameStore products and community members")]
#[command(version)]
pub struct Cli {
    /// Color theme for this session (overrides the saved choice)
    ///
    /// Valid themes: dark, light
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Number of products to load
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PRODUCT_LIMIT)]
    pub products: u32,

    /// Number of community members to load
    #[arg(long, value_name = "N", default_value_t = DEFAULT_USER_COUNT)]
    pub users: u32,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Theme forced from the command line
    pub theme: Option<Theme>,
    /// How many products to request
    pub product_limit: u32,
    /// How many users to request
    pub user_count: u32,
    /// Gateway tunables
    pub gateway: GatewayConfig,
    /// Log destination override
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            theme: None,
            product_limit: DEFAULT_PRODUCT_LIMIT,
            user_count: DEFAULT_USER_COUNT,
            gateway: GatewayConfig::default(),
            log_file: None,
        }
    }
}

/// Parses a theme string argument into a Theme.
///
/// # Returns
/// * `Ok(Theme)` if the string names a theme
/// * `Err(CliError::InvalidTheme)` otherwise
pub fn parse_theme_arg(s: &str) -> Result<Theme, CliError> {
    Theme::parse(s).ok_or_else(|| CliError::InvalidTheme(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if a flag value is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let theme = cli.theme.as_deref().map(parse_theme_arg).transpose()?;

        if cli.timeout == 0 {
            return Err(CliError::InvalidTimeout);
        }

        Ok(StartupConfig {
            theme,
            product_limit: cli.products,
            user_count: cli.users,
            gateway: GatewayConfig::default()
                .with_timeout(Duration::from_secs(cli.timeout))
                .with_freshness_window(DEFAULT_FRESHNESS_WINDOW),
            log_file: cli.log_file.clone(),
        })
    }
}
