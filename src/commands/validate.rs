use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dashboard_manager::loader::ChartLoader;
use dashboard_manager::validation::{ChartValidator, DashboardFileError, DashboardValidator};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `validate` subcommand.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the Helm chart directory
    #[arg(
        short = 'c',
        long = "chart-path",
        env = "DASHBOARD_CHART_PATH",
        default_value = "."
    )]
    pub chart_path: PathBuf,

    /// Skip the Chart.yaml / values.yaml / templates structure check
    #[arg(long = "skip-chart")]
    pub skip_chart: bool,
}

pub fn validate_command(args: &ValidateArgs) -> Result<()> {
    println!("Validating dashboard files in: {}", args.chart_path.display());

    if !args.skip_chart {
        ChartValidator::new().validate(&args.chart_path)?;
        info!("✓ Chart structure is valid");
    }

    let loader = ChartLoader::new(&args.chart_path)?;
    let validator = DashboardValidator::new();

    let mut valid_count = 0;
    let mut failures = Vec::new();

    for folder in &loader.values().dashboard_folders {
        println!("Checking folder: {folder}");

        for file in loader.folder_files(folder)? {
            println!("   Validating: {}", file.file_name());

            match validator.validate_file(&file.path) {
                Ok(_) => valid_count += 1,
                Err(err) => {
                    failures.push(format!("{}: {err}", file.path.display()));
                    if matches!(err, DashboardFileError::Parse(_)) {
                        eprintln!("{:?}", miette::Report::new(err));
                    }
                }
            }
        }
    }

    println!("\nValidation Summary:");
    println!("   {} Valid dashboards: {valid_count}", "OK:".green());
    println!("   {} Validation errors: {}", "ERROR:".red(), failures.len());

    if !failures.is_empty() {
        println!("\nValidation Errors:");
        for failure in &failures {
            println!("   - {failure}");
        }
        anyhow::bail!("validation failed with {} errors", failures.len());
    }

    println!("\n✓ All dashboards are valid!");
    Ok(())
}
