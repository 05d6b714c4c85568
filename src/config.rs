use std::{env, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::models::{Alphabet, IdShape};
use crate::services::id_generator::DEFAULT_SIZE;

// Application-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
}

// Environment enum for different deployment environments
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

// Implement FromStr trait for Environment enum to enable parsing from string
impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

// How generated identifiers are written to stdout
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}. Must be one of: plain, json", s)),
        }
    }
}

// Result type for configuration functions
type ConfigResult<T> = Result<T, ConfigError>;

// Generator-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub shape: IdShape,
    pub count: usize,
    pub output: OutputFormat,
    /// Seed for reproducible output. Identifiers generated with a seed are predictable.
    pub seed: Option<u64>,
}

// Config struct that matches our environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub generator: GeneratorConfig,
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> ConfigResult<Self> {
        // Load .env file if it exists
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        Self::from_env()
    }

    // Build configuration from the current process environment only
    pub fn from_env() -> ConfigResult<Self> {
        // Get version from Cargo.toml or environment
        let version = option_env!("CARGO_PKG_VERSION")
            .unwrap_or("0.1.0")
            .to_string();

        // Create the app config
        let app = AppConfig {
            name: get_env_or_default("APP_NAME", "nanoid-gen")?,
            version: env::var("APP_VERSION").unwrap_or(version),
            environment: get_env_or_default("APP_ENVIRONMENT", "development")?,
            log_level: get_env_or_default("APP_LOG_LEVEL", "info")?,
        };

        // Generator config
        let shape = match get_env_or_default::<IdShape>("GENERATOR_SHAPE", "default")? {
            IdShape::Custom { .. } => IdShape::Custom {
                alphabet: get_alphabet("GENERATOR_ALPHABET")?,
                size: get_env_or_default("GENERATOR_SIZE", &DEFAULT_SIZE.to_string())?,
            },
            shape => shape,
        };

        let generator = GeneratorConfig {
            shape,
            count: get_env_or_default("GENERATOR_COUNT", "1")?,
            output: get_env_or_default("GENERATOR_OUTPUT", "plain")?,
            seed: get_optional_env("GENERATOR_SEED")?,
        };

        let config = Config { app, generator };
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(format!("Could not parse {}: {}", key, e))),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            default.parse::<T>().map_err(|e| {
                ConfigError::ParseError(format!("Could not parse default for {}: {}", key, e))
            })
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}

/// Helper function to get an env variable that may be absent
fn get_optional_env<T: FromStr>(key: &str) -> ConfigResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::ParseError(format!("Could not parse {}: {}", key, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}

// Alphabet errors keep their own variant so the message names the real problem
fn get_alphabet(key: &str) -> ConfigResult<Alphabet> {
    match env::var(key) {
        Ok(val) => Ok(Alphabet::new(&val)?),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using the default alphabet", key);
            Ok(Alphabet::default())
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}
