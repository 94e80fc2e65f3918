use anyhow::{Context, Result};
use clap::Args;
use dashboard_manager::templating::{VariableResolver, parse_var};
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the `render` subcommand.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// File whose placeholders should be substituted
    pub file: PathBuf,

    /// Variable to substitute, as NAME=VALUE (repeatable)
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Ignore DASHBOARD_VAR_* environment variables
    #[arg(long = "no-env")]
    pub no_env: bool,
}

pub fn render_command(args: &RenderArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read file {}", args.file.display()))?;

    let mut resolver = VariableResolver::new();
    if !args.no_env {
        resolver.add_env_vars();
    }
    resolver.add_cli_vars(&args.vars);
    debug!("Substituting {} variables", resolver.get_variables().len());

    print!("{}", resolver.substitute(&content));
    Ok(())
}
