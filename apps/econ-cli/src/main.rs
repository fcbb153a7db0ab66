use clap::{Args, Parser, Subcommand};
use econ_core::AggregatedError;
use econ_criteria::{CriteriaConfig, RowValidator, rows_to_value};
use econ_model::{ModelError, ModelResult};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "econ-cli")]
#[command(about = "Econ-model row validation and normalization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an econ-model document (JSON or YAML)
    Validate {
        /// Path to the model file
        model_path: PathBuf,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Validate a bare JSON row array and print the normalized rows
    Rows {
        /// Path to a JSON file holding the row array
        rows_path: PathBuf,
        /// Location prefix used in error paths
        #[arg(long, default_value = "rows")]
        location: String,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Validate a model and write it back with normalized rows
    Normalize {
        /// Path to the model file
        model_path: PathBuf,
        /// Output path; format follows the extension
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args)]
struct EngineArgs {
    /// Engine configuration file (JSON or YAML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reject rows that match more than one criteria
    #[arg(long)]
    strict: bool,
    /// Override the maximum decimal scale
    #[arg(long)]
    decimal_scale: Option<u32>,
}

impl EngineArgs {
    fn resolve(&self) -> ModelResult<CriteriaConfig> {
        let mut config = match &self.config {
            Some(path) => econ_model::load_config(path)?,
            None => CriteriaConfig::default(),
        };
        if self.strict {
            config = config.strict();
        }
        if let Some(scale) = self.decimal_scale {
            config = config.with_decimal_scale(scale);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { model_path, engine } => cmd_validate(&model_path, &engine),
        Commands::Rows {
            rows_path,
            location,
            engine,
        } => cmd_rows(&rows_path, &location, &engine),
        Commands::Normalize {
            model_path,
            output,
            engine,
        } => cmd_normalize(&model_path, &output, &engine),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(ModelError::Validation(agg)) => {
            print_issues(&agg);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(model_path: &Path, engine: &EngineArgs) -> ModelResult<()> {
    println!("Validating model: {}", model_path.display());
    let config = engine.resolve()?;
    let model = econ_model::load(model_path, &config)?;
    println!(
        "✓ Model '{}' is valid ({} sections)",
        model.name,
        model.sections.len()
    );
    Ok(())
}

fn cmd_rows(rows_path: &Path, location: &str, engine: &EngineArgs) -> ModelResult<()> {
    let config = engine.resolve()?;
    let content = std::fs::read_to_string(rows_path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;

    let rows = RowValidator::new(config).validate(&raw, location)?;
    info!(rows = rows.len(), "row array is valid");
    println!("{}", serde_json::to_string_pretty(&rows_to_value(rows))?);
    Ok(())
}

fn cmd_normalize(model_path: &Path, output: &Path, engine: &EngineArgs) -> ModelResult<()> {
    let config = engine.resolve()?;
    let model = econ_model::load(model_path, &config)?;
    econ_model::save(output, &model, &config)?;
    println!("✓ Normalized model written to {}", output.display());
    Ok(())
}

fn print_issues(agg: &AggregatedError) {
    eprintln!(
        "✗ {} validation issue{}:",
        agg.len(),
        if agg.len() == 1 { "" } else { "s" }
    );
    for issue in agg.iter() {
        eprintln!("  {:<40} {}", issue.location, issue.message);
    }
}
