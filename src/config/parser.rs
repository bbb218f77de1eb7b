use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Reads and parses a configuration file without validating it
///
/// Use this when command-line overrides still have to be applied; call
/// [`validate`](crate::config::validate) once they are in place.
pub fn parse_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Loads, parses and validates a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use site_harvester::config::load_config;
///
/// let config = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Output: {}", config.harvest.output_dir.display());
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config = parse_config_file(path)?;
    validate(&config)?;
    Ok(config)
}
