use std::io::{self, Write};

use env_logger::Env;
use log::{debug, info, warn};

use crate::{
    config::{Config, Environment, GeneratorConfig, OutputFormat},
    errors::AppError,
    services::id_generator::IdGenerator,
    utils::random::{ByteSource, OsByteSource, SeededByteSource},
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

// Setup logging with custom format and configuration
fn setup_logging(config: &Config) -> Result<(), AppError> {
    // Configure log level based on environment and config
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug".to_string(),
        Environment::Production => "warn".to_string(),
    };

    // Logs go to stderr so stdout only carries identifiers
    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "auto");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

pub fn run() -> AppResult<()> {
    // Load application configuration
    let config = Config::load()?;

    // Setup logging based on configuration
    setup_logging(&config)?;

    info!("Starting {} v{}", config.app.name, config.app.version);
    debug!("Environment: {:?}", config.app.environment);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.generator.seed {
        Some(seed) => {
            warn!("GENERATOR_SEED is set, identifiers are predictable and must not be used as secrets");
            let generator = IdGenerator::new(SeededByteSource::new(seed));
            write_ids(&generator, &config.generator, &mut out)?;
        }
        None => {
            let generator = IdGenerator::new(OsByteSource);
            write_ids(&generator, &config.generator, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Generates `config.count` identifiers and writes them to `out`
pub fn write_ids<S, W>(generator: &IdGenerator<S>, config: &GeneratorConfig, out: &mut W) -> AppResult<()>
where
    S: ByteSource,
    W: Write,
{
    debug!("Generating {} identifiers of shape {:?}", config.count, config.shape);

    let ids = (0..config.count)
        .map(|_| generator.generate_shape(&config.shape))
        .collect::<Result<Vec<String>, _>>()?;

    match config.output {
        OutputFormat::Plain => {
            for id in &ids {
                writeln!(out, "{}", id)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &ids)?;
            writeln!(out)?;
        }
    }

    info!("Generated {} identifiers", ids.len());
    Ok(())
}
