use crate::catalog::kits::KitEntry;
use crate::validation::quantity::MAX_QUANTITY;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub roles: RolesConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub kits: BTreeMap<String, Vec<KitEntry>>,
    #[serde(default)]
    pub info: InfoConfig,
    #[serde(default)]
    pub consumable: ConsumableConfig,
    #[serde(default)]
    pub timers: TimersConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    #[serde(default = "default_properties_file")]
    pub properties_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RolesConfig {
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default)]
    pub half_operators: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// Extra TOML file with an `[items]` table, merged over the inline items
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub items: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct InfoConfig {
    #[serde(default)]
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsumableConfig {
    #[serde(default = "default_consumable_item")]
    pub item: String,
    #[serde(default = "default_consumable_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimersConfig {
    #[serde(default = "default_timer_frequency")]
    pub default_frequency: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            properties_file: default_properties_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for ConsumableConfig {
    fn default() -> Self {
        Self {
            item: default_consumable_item(),
            quantity: default_consumable_quantity(),
        }
    }
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            default_frequency: default_timer_frequency(),
        }
    }
}

// Default value functions
fn default_command_prefix() -> String {
    "!".to_string()
}

fn default_properties_file() -> PathBuf {
    PathBuf::from("server.properties")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_console() -> bool {
    false
}

fn default_consumable_item() -> String {
    "cooked beef".to_string()
}

fn default_consumable_quantity() -> u32 {
    64
}

fn default_timer_frequency() -> u32 {
    30 // seconds
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&content)?;

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.server.command_prefix;
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            bail!("command_prefix must be non-empty and contain no whitespace");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if self.consumable.item.trim().is_empty() {
            bail!("consumable item must not be empty");
        }

        if self.consumable.quantity == 0 || self.consumable.quantity > MAX_QUANTITY {
            bail!(
                "consumable quantity ({}) must be between 1 and {}",
                self.consumable.quantity,
                MAX_QUANTITY
            );
        }

        if self.timers.default_frequency == 0 {
            bail!("default_frequency must be greater than 0");
        }

        for (name, entries) in &self.kits {
            if entries.is_empty() {
                bail!("kit '{}' has no items", name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").expect("Failed to parse empty config");

        assert_eq!(config.server.command_prefix, "!");
        assert_eq!(config.server.properties_file, PathBuf::from("server.properties"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.consumable.quantity, 64);
        assert_eq!(config.timers.default_frequency, 30);
        assert!(config.kits.is_empty());
        assert!(config.roles.operators.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [server]
            command_prefix = "."

            [roles]
            operators = ["Notch"]
            half_operators = ["Jeb"]

            [catalog.items]
            diamond = "264"
            "gold ingot" = "266"

            [kits]
            starter = ["stone sword", ["bread", 16]]

            [info]
            rules = ["Be nice", "No griefing"]
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).expect("Failed to load config");

        assert_eq!(config.server.command_prefix, ".");
        assert_eq!(config.roles.operators, vec!["Notch".to_string()]);
        assert_eq!(config.catalog.items.get("gold ingot"), Some(&"266".to_string()));
        assert_eq!(config.kits["starter"][1], KitEntry::Counted("bread".to_string(), 16));
        assert_eq!(config.info.rules.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/chatcmd.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_log_level() {
        let result = Config::from_toml("[logging]\nlevel = \"loud\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_whitespace_prefix() {
        assert!(Config::from_toml("[server]\ncommand_prefix = \"! \"").is_err());
        assert!(Config::from_toml("[server]\ncommand_prefix = \"\"").is_err());
    }

    #[test]
    fn test_rejects_oversized_consumable() {
        assert!(Config::from_toml("[consumable]\nquantity = 5000").is_err());
        assert!(Config::from_toml("[consumable]\nquantity = 0").is_err());
    }

    #[test]
    fn test_rejects_empty_kit() {
        assert!(Config::from_toml("[kits]\nnothing = []").is_err());
    }
}
