use analytics::AnalyticsEngine;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, Locale, LoggingSettings, OutputFormat, Profile};
use core_types::Customer;
use reporter::Reporter;
use std::path::PathBuf;
use std::process::ExitCode;
use store::{audit_basket_totals, DataSource, JsonFileSource, StoreError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// The main entry point for the Basketlens store analytics tool.
fn main() -> ExitCode {
    // Load BASKETLENS__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config =
        configuration::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => {
            args.apply(&mut config);
            handle_report(&config)
        }
        Commands::Tasks(args) => {
            if let Some(profile) = args.profile {
                config.report.profile = profile;
            }
            if let Some(locale) = args.locale {
                config.report.locale = locale;
            }
            handle_tasks(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Descriptive analytics over a store's customer purchase records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to ./config.toml when it exists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset and print every task of the selected profile.
    Report(ReportArgs),
    /// List the numbered tasks of a profile without loading any data.
    Tasks(TasksArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The JSON file holding the customer records.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Which set of tasks to print.
    #[arg(long, value_enum)]
    profile: Option<Profile>,

    /// The language of the report labels.
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    /// How to lay the results out.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl ReportArgs {
    /// Command-line flags win over the file and environment layers.
    fn apply(self, config: &mut Config) {
        if let Some(data) = self.data {
            config.data.path = data;
        }
        if let Some(profile) = self.profile {
            config.report.profile = profile;
        }
        if let Some(locale) = self.locale {
            config.report.locale = locale;
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
    }
}

#[derive(Parser)]
struct TasksArgs {
    #[arg(long, value_enum)]
    profile: Option<Profile>,

    #[arg(long, value_enum)]
    locale: Option<Locale>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads the dataset, runs the analytics engine and prints the rendered report.
fn handle_report(config: &Config) -> Result<ExitCode> {
    let reporter = Reporter::new(config.report.clone());
    let source = JsonFileSource::new(&config.data.path);

    // A load failure is fatal: nothing is computed from a partial dataset.
    let customers = match load_dataset(&source) {
        Ok(customers) => customers,
        Err(e) => {
            tracing::error!(error = %e, source = %source.describe(), "Failed to load dataset.");
            eprintln!("{}: {}", reporter.labels().error, e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mismatches = audit_basket_totals(&customers);
    if !mismatches.is_empty() {
        tracing::warn!(
            baskets = mismatches.len(),
            "Stored basket totals disagree with their line items; spend figures use the stored totals."
        );
    }

    let engine = AnalyticsEngine::new();
    let report = engine
        .summarize(&customers)
        .context("Failed to compute store analytics")?;

    let rendered = reporter.render(&report).context("Failed to render report")?;
    print!("{rendered}");

    Ok(ExitCode::SUCCESS)
}

fn load_dataset(source: &impl DataSource) -> Result<Vec<Customer>, StoreError> {
    tracing::info!(source = %source.describe(), "Loading dataset.");
    source.load()
}

fn handle_tasks(config: &Config) {
    let reporter = Reporter::new(config.report.clone());
    let labels = reporter.labels();
    for task in reporter.tasks() {
        println!("{} {}: {}", labels.task, task.number, task.kind.title(labels));
    }
}

/// Installs the global subscriber: stderr always, plus a daily rolling file when
/// `logging.directory` is set. `RUST_LOG` takes precedence over `logging.level`.
///
/// The returned guard must stay alive for the file writer to flush.
fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .with_context(|| format!("Invalid log filter '{}'", settings.level))?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let directory = settings
        .directory
        .as_ref()
        .filter(|dir| !dir.as_os_str().is_empty());

    match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "basketlens.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .context("Failed to install the tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .context("Failed to install the tracing subscriber")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"[
        {
            "id": "c1",
            "first_name": "Ayse",
            "last_name": "Yilmaz",
            "cash": 500,
            "basket": {
                "id": "b1",
                "products": [
                    {"id": "p1", "category": "Books", "name": "Novel", "price": 12.5, "quantity": 2}
                ],
                "total": 25.0
            }
        }
    ]"#;

    fn report_args(args: &[&str]) -> ReportArgs {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Commands::Report(args) => args,
            Commands::Tasks(_) => panic!("expected the report command"),
        }
    }

    #[test]
    fn report_flags_override_file_values() {
        let mut config = configuration::load_config_from_str(
            "[data]\npath = \"from-file.json\"\n\n[report]\nlocale = \"tr\"\nformat = \"table\"",
        )
        .unwrap();

        report_args(&["basketlens", "report", "--data", "flag.json", "--format", "json"])
            .apply(&mut config);

        assert_eq!(config.data.path, PathBuf::from("flag.json"));
        assert_eq!(config.report.format, OutputFormat::Json);
        // Flags that were not given leave the file value alone.
        assert_eq!(config.report.locale, Locale::Tr);
        assert_eq!(config.report.profile, Profile::Full);
    }

    #[test]
    fn global_config_flag_parses_before_the_subcommand() {
        let cli = Cli::try_parse_from([
            "basketlens",
            "--config",
            "custom.toml",
            "tasks",
            "--profile",
            "main-page",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Tasks(args) => assert_eq!(args.profile, Some(Profile::MainPage)),
            Commands::Report(_) => panic!("expected the tasks command"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["basketlens", "report", "--format", "xml"]).is_err());
    }

    #[test]
    fn handle_report_succeeds_on_a_dataset_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let mut config = Config::default();
        let path = file.path().to_string_lossy().into_owned();
        report_args(&["basketlens", "report", "--data", path.as_str(), "--format", "json"])
            .apply(&mut config);

        let code = handle_report(&config).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn handle_report_fails_on_a_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.data.path = dir.path().join("absent.json");

        let code = handle_report(&config).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }
}
