use anyhow::{Context, Result};
use clap::Args;
use dashboard_manager::helm::{DEFAULT_HELM_BIN, HelmRenderer, RenderRequest};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `template` subcommand.
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Path to the Helm chart directory
    #[arg(
        short = 'c',
        long = "chart-path",
        env = "DASHBOARD_CHART_PATH",
        default_value = "."
    )]
    pub chart_path: PathBuf,

    /// Path to an additional values file
    #[arg(short = 'f', long = "values")]
    pub values_file: Option<PathBuf>,

    /// Release name
    #[arg(short = 'r', long = "release", default_value = "test-release")]
    pub release_name: String,

    /// Target namespace
    #[arg(short = 'n', long = "namespace", default_value = "monitoring")]
    pub namespace: String,

    /// Helm executable name or path
    #[arg(long = "helm-bin", env = "HELM_BIN", default_value = DEFAULT_HELM_BIN)]
    pub helm_bin: String,
}

pub fn template_command(args: &TemplateArgs) -> Result<()> {
    info!("Rendering templates for release: {}", args.release_name);

    let renderer = HelmRenderer::new(&args.helm_bin)?;
    let output = renderer
        .render(&RenderRequest {
            chart_path: &args.chart_path,
            release_name: &args.release_name,
            namespace: &args.namespace,
            values_file: args.values_file.as_deref(),
        })
        .context("failed to render templates")?;

    print!("{output}");
    Ok(())
}
