//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use masala_commerce::money::Currency;
use masala_commerce::notify::DEFAULT_DURATION_SECS;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["masala.toml", ".masala.toml", "masala.json"];

/// Longest a notification banner may be configured to stay up.
pub const MAX_NOTIFICATION_SECS: u64 = 3600;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasalaConfig {
    /// Where the cart is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cart settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Notification banner settings.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MasalaConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            bail!("storage.key must not be empty");
        }
        if Currency::from_code(&self.cart.currency).is_none() {
            bail!("cart.currency '{}' is not supported", self.cart.currency);
        }
        if self.notifications.duration_secs == 0 {
            bail!("notifications.duration_secs must be at least 1");
        }
        if self.notifications.duration_secs > MAX_NOTIFICATION_SECS {
            bail!(
                "notifications.duration_secs must be at most {}",
                MAX_NOTIFICATION_SECS
            );
        }
        Ok(())
    }

    /// Configured cart currency, falling back to the default.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.cart.currency).unwrap_or_default()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding stored carts, relative to the working directory.
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,

    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".masala")
}

fn default_storage_key() -> String {
    masala_commerce::cart::DEFAULT_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// Cart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// ISO currency code for new carts (default: INR).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a banner stays up.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
}

fn default_duration_secs() -> u64 {
    DEFAULT_DURATION_SECS as u64
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,
    /// Structured JSON logs.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default masala.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Mystique Masala CLI configuration

[storage]
dir = ".masala"
key = "{key}"

[cart]
currency = "INR"

[notifications]
duration_secs = {duration}

[logging]
level = "warn"
format = "compact"
"#,
        key = default_storage_key(),
        duration = default_duration_secs()
    )
}
