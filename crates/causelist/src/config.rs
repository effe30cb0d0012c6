//! Configuration management for the causelist CLI.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments
//! 2. Environment variables (CAUSELIST_*)
//! 3. Config file (~/.config/causelist/config.toml)
//! 4. Default values

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Audit database path. Audit logging stays off while this is unset.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Server host.
    #[serde(default = "default_host")]
    pub server_host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub server_port: u16,

    /// Hold each lookup for a court-website-sized delay.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    /// Enable CORS on the server.
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_simulate_latency() -> bool {
    true
}

fn default_cors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            server_host: default_host(),
            server_port: default_port(),
            simulate_latency: default_simulate_latency(),
            cors: default_cors(),
        }
    }
}

impl Config {
    /// Loads configuration from all sources.
    ///
    /// Reports warnings for configuration errors but falls back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("CAUSELIST_"));

        match figment.extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                // Report the error clearly to the user
                eprintln!("\x1b[33mWarning:\x1b[0m Configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {}", e);
                eprintln!();
                eprintln!("  To fix, edit or delete the config file:");
                eprintln!("    rm {}", config_path.display());
                eprintln!();
                Config::default()
            }
        }
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("causelist")
            .join("config.toml")
    }

    /// Returns the path to the config directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("causelist")
    }

    /// Saves the current configuration to the config file.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_dir = Self::config_dir();
        std::fs::create_dir_all(&config_dir)?;

        let config_path = Self::config_path();
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        std::fs::write(&config_path, toml_str)?;
        Ok(())
    }

    /// Sets the audit database path and saves.
    pub fn set_database_path(&mut self, path: &str) -> Result<(), std::io::Error> {
        self.database_path = Some(PathBuf::from(path));
        self.save()
    }

    /// Clears the audit database path and saves.
    pub fn clear_database_path(&mut self) -> Result<(), std::io::Error> {
        self.database_path = None;
        self.save()
    }
}

/// Prints the current configuration and its sources.
pub fn show_config() {
    let config = Config::load();
    let config_path = Config::config_path();

    println!("Causelist Configuration");
    println!("=======================\n");

    println!("Config file: {}", config_path.display());
    if config_path.exists() {
        println!("Status: Found\n");
    } else {
        println!("Status: Not found (using defaults)\n");
    }

    println!("Current settings:");
    println!(
        "  database_path: {}",
        config
            .database_path
            .as_deref()
            .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
    );
    println!("  server_host: {}", config.server_host);
    println!("  server_port: {}", config.server_port);
    println!("  simulate_latency: {}", config.simulate_latency);
    println!("  cors: {}", config.cors);

    println!("\nEnvironment variables:");
    println!("  CAUSELIST_DATABASE_PATH");
    println!("  CAUSELIST_SERVER_HOST");
    println!("  CAUSELIST_SERVER_PORT");
    println!("  CAUSELIST_SIMULATE_LATENCY");
    println!("  CAUSELIST_CORS");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.database_path.is_none());
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3000);
        assert!(config.simulate_latency);
        assert!(config.cors);
    }

    #[test]
    fn test_config_path_ends_with_toml() {
        let path = Config::config_path();
        assert!(path.ends_with("causelist/config.toml"));
    }
}
