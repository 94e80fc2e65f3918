use anyhow::Result;
use clap::Args;
use dashboard_manager::helm::OutputFormat;
use std::path::PathBuf;

/// Arguments for the `inspect` subcommand.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Dashboard JSON file
    pub file: PathBuf,

    /// Output format (yaml|json)
    #[arg(short = 'o', long = "output", default_value = "yaml")]
    pub output: String,
}

pub fn inspect_command(args: &InspectArgs) -> Result<()> {
    let format: OutputFormat = args.output.parse()?;
    let dashboard = super::read_dashboard(&args.file)?;
    let metadata = dashboard.metadata();

    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&metadata)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metadata)?),
    }

    Ok(())
}
