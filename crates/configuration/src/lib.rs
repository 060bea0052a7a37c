use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    Config, DataSettings, Locale, LoggingSettings, OutputFormat, Profile,
    ReportSettings,
};

/// The file read when no explicit path is given. It is optional.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of the environment variables that override file values,
/// e.g. `BASKETLENS__REPORT__LOCALE=tr`.
pub const ENV_PREFIX: &str = "BASKETLENS";

/// Loads the application configuration.
///
/// Values are layered: built-in defaults, then the TOML file, then `BASKETLENS__*`
/// environment variables. An explicit `path` must exist; the default `config.toml` may
/// be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    finish(builder)
}

/// Parses configuration from a TOML string, without consulting the environment.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(builder)
}

fn finish(builder: config::Config) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;
    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid {
            key: "data.path",
            reason: "must not be empty".to_string(),
        });
    }
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: "logging.level",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn empty_document_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data.path, PathBuf::from("dataJson/store_data.json"));
        assert_eq!(config.report.profile, Profile::Full);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn sections_override_defaults() {
        let config = load_config_from_str(
            r#"
            [data]
            path = "fixtures/customers.json"

            [report]
            profile = "main-page"
            locale = "tr"
            format = "json"

            [logging]
            level = "analytics=debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.path, PathBuf::from("fixtures/customers.json"));
        assert_eq!(config.report.profile, Profile::MainPage);
        assert_eq!(config.report.locale, Locale::Tr);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result = load_config_from_str("[report]\nlocale = \"de\"\n");
        assert!(matches!(result, Err(ConfigError::Source(_))));
    }

    #[test]
    fn empty_data_path_fails_validation() {
        let result = load_config_from_str("[data]\npath = \"\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid { key: "data.path", .. })));
    }

    #[test]
    fn explicit_file_is_read() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[report]\nformat = \"table\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.report.format, OutputFormat::Table);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("missing.toml").as_path()));
        assert!(matches!(result, Err(ConfigError::Source(_))));
    }
}
