pub mod file_scanner;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::Values;

pub use file_scanner::{DashboardFile, DashboardScanner};

/// Read and parse a chart's `values.yaml`
pub fn load_values(values_path: &Path) -> Result<Values> {
    let content = std::fs::read_to_string(values_path).context("failed to read values file")?;
    Values::from_yaml(&content).context("failed to parse values file")
}

/// A Helm chart on disk together with its parsed values
pub struct ChartLoader {
    chart_path: PathBuf,
    values: Values,
}

impl ChartLoader {
    pub fn new(chart_path: impl Into<PathBuf>) -> Result<Self> {
        let chart_path = chart_path.into();
        let values_path = chart_path.join("values.yaml");
        debug!("Loading values from {}", values_path.display());

        let values = load_values(&values_path).context("failed to load values.yaml")?;

        Ok(Self { chart_path, values })
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn dashboards_dir(&self) -> PathBuf {
        self.chart_path.join("dashboards")
    }

    pub fn folder_path(&self, folder: &str) -> PathBuf {
        self.dashboards_dir().join(folder)
    }

    /// Dashboard files in one configured folder
    pub fn folder_files(&self, folder: &str) -> Result<Vec<DashboardFile>> {
        DashboardScanner::scan_folder(&self.folder_path(folder), folder)
    }

    /// Dashboard files across every configured folder, in configuration order
    pub fn dashboard_files(&self) -> Result<Vec<DashboardFile>> {
        let mut files = Vec::new();
        for folder in &self.values.dashboard_folders {
            files.extend(self.folder_files(folder)?);
        }
        Ok(files)
    }
}
