use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{GenerateArgs, InspectArgs, ListArgs, RenderArgs, TemplateArgs, ValidateArgs};

#[derive(Parser)]
#[command(
    name = "dashboard-manager",
    about = "Grafana dashboard manager for Helm charts",
    version,
    long_about = "A CLI tool for managing Grafana dashboards and Helm chart configurations.\n\
                  It helps validate, list, render, and package Grafana dashboard deployments."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate dashboard JSON files and the Helm chart
    Validate(ValidateArgs),

    /// Generate Kubernetes manifests for the chart's dashboards
    Generate(GenerateArgs),

    /// List all dashboard files in the chart
    List(ListArgs),

    /// Render Helm templates locally with `helm template`
    Template(TemplateArgs),

    /// Show summary metadata for a dashboard file
    Inspect(InspectArgs),

    /// Substitute $NAME / ${NAME} placeholders in a file and print the result
    Render(RenderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate(args) => commands::validate_command(&args),
        Commands::Generate(args) => commands::generate_command(&args),
        Commands::List(args) => commands::list_command(&args),
        Commands::Template(args) => commands::template_command(&args),
        Commands::Inspect(args) => commands::inspect_command(&args),
        Commands::Render(args) => commands::render_command(&args),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("dashboard_manager=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("dashboard_manager=info"), // -v: info messages
        _ => EnvFilter::new("dashboard_manager=debug"), // -vv or more: full debug
    };

    // Logs go to stderr so generated manifests on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
