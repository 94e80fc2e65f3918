use anyhow::Result;
use clap::Args;
use dashboard_manager::loader::ChartLoader;
use std::path::PathBuf;

/// Arguments for the `list` subcommand.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Path to the Helm chart directory
    #[arg(
        short = 'c',
        long = "chart-path",
        env = "DASHBOARD_CHART_PATH",
        default_value = "."
    )]
    pub chart_path: PathBuf,
}

pub fn list_command(args: &ListArgs) -> Result<()> {
    let loader = ChartLoader::new(&args.chart_path)?;

    println!("Dashboard Inventory:");

    let mut total_size = 0;
    let mut total_dashboards = 0;

    for folder in &loader.values().dashboard_folders {
        println!("\n{folder}/");

        let files = loader.folder_files(folder)?;
        if files.is_empty() {
            println!("   (none)");
        }
        for file in files {
            println!("   {} ({})", file.file_name(), format_file_size(file.size));
            total_size += file.size;
            total_dashboards += 1;
        }
    }

    println!("\nSummary:");
    println!("   Total dashboards: {total_dashboards}");
    println!("   Total size: {}", format_file_size(total_size));

    Ok(())
}

/// Human readable size using 1024-based units, e.g. `512 B` or `1.5 KB`
pub fn format_file_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if size < UNIT {
        return format!("{size} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", size as f64 / div as f64, PREFIXES[exp])
}
