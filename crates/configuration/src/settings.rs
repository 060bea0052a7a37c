use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in the file; missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub data: DataSettings,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

/// Where the customer dataset lives.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataSettings {
    /// Path to the JSON array of customers.
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dataJson/store_data.json"),
        }
    }
}

/// Which tasks to print and how.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportSettings {
    pub profile: Profile,
    pub locale: Locale,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `analytics=debug`. `RUST_LOG` wins over it.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// The task selection of a report.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Tasks 1-15, task 4 being the average line items per customer.
    #[default]
    Full,
    /// Task 4 is the average product price; tasks 10 and 15 are left out.
    MainPage,
}

/// The language of every label the reporter prints.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Line-oriented text, one block per task.
    #[default]
    Text,
    /// The same tasks rendered as tables.
    Table,
    /// The raw results as a JSON document.
    Json,
}
