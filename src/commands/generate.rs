use anyhow::Result;
use clap::Args;
use dashboard_manager::helm::{OutputFormat, generate_manifests};
use dashboard_manager::loader::ChartLoader;
use std::path::PathBuf;
use tracing::info;

const FALLBACK_NAMESPACE: &str = "monitoring";

/// Arguments for the `generate` subcommand.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the Helm chart directory
    #[arg(
        short = 'c',
        long = "chart-path",
        env = "DASHBOARD_CHART_PATH",
        default_value = "."
    )]
    pub chart_path: PathBuf,

    /// Output format (yaml|json)
    #[arg(short = 'o', long = "output", default_value = "yaml")]
    pub output: String,

    /// Target namespace (defaults to dashboardNamespace, then namespace from values.yaml)
    #[arg(short = 'n', long = "namespace")]
    pub namespace: Option<String>,
}

pub fn generate_command(args: &GenerateArgs) -> Result<()> {
    let format: OutputFormat = args.output.parse()?;
    let loader = ChartLoader::new(&args.chart_path)?;

    let namespace = args
        .namespace
        .as_deref()
        .or_else(|| loader.values().default_namespace())
        .unwrap_or(FALLBACK_NAMESPACE);
    info!("Generating manifests for namespace: {namespace}");

    let manifests = generate_manifests(&loader, namespace)
        .map_err(|e| anyhow::anyhow!("failed to generate manifests: {e:#}"))?;

    print!("{}", manifests.render(format)?);
    Ok(())
}
