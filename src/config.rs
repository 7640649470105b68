//! Configuration management for Shelfmark

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// One bootstrap inventory entry.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedBook {
    pub title: String,
    pub author: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Inventory seeded into the catalog at startup, in file order.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub books: Vec<SeedBook>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix SHELFMARK_)
            .add_source(
                Environment::with_prefix("SHELFMARK")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SeedConfig {
    /// The sample inventory the original application shipped with.
    fn default() -> Self {
        let entry = |title: &str, author: &str, available: bool| SeedBook {
            title: title.to_string(),
            author: author.to_string(),
            available,
        };
        Self {
            books: vec![
                entry("To Kill a Mockingbird", "Harper Lee", true),
                entry("1984", "George Orwell", true),
                entry("The Great Gatsby", "F. Scott Fitzgerald", false),
                entry("Moby Dick", "Herman Melville", true),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_matches_sample_inventory() {
        let seed = SeedConfig::default();
        assert_eq!(seed.books.len(), 4);
        assert_eq!(seed.books[1].title, "1984");
        assert!(seed.books[1].available);
        assert_eq!(seed.books[2].title, "The Great Gatsby");
        assert!(!seed.books[2].available);
    }
}
