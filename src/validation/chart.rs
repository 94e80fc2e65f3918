use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use super::schemas::get_chart_schema;
use crate::models::Values;

// Use JSON Schema draft-07 for Chart.yaml, matching what Helm documents
use jsonschema::draft7 as schema_draft;

const REQUIRED_ENTRIES: [&str; 3] = ["Chart.yaml", "values.yaml", "templates"];

/// Checks that a directory is a usable Helm chart
pub struct ChartValidator;

impl Default for ChartValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, chart_path: &Path) -> Result<()> {
        for entry in REQUIRED_ENTRIES {
            if !chart_path.join(entry).exists() {
                anyhow::bail!("required file/directory missing: {entry}");
            }
        }

        debug!("Validating Chart.yaml...");
        self.validate_chart_file(&chart_path.join("Chart.yaml"))?;

        debug!("Validating values.yaml...");
        let values_path = chart_path.join("values.yaml");
        let content = std::fs::read_to_string(&values_path)
            .with_context(|| format!("failed to read {}", values_path.display()))?;
        Values::from_yaml(&content).context("invalid values.yaml")?;

        Ok(())
    }

    fn validate_chart_file(&self, chart_file: &Path) -> Result<()> {
        let content = std::fs::read_to_string(chart_file).context("failed to read Chart.yaml")?;
        let chart: Value = serde_yaml::from_str(&content).context("invalid Chart.yaml")?;

        let schema = get_chart_schema().context("Failed to parse chart schema")?;
        let validator = schema_draft::options()
            .build(&schema)
            .context("Failed to compile chart schema")?;

        let problems: Vec<String> = validator
            .iter_errors(&chart)
            .map(|error| {
                let location = error.instance_path.to_string();
                if location.is_empty() {
                    error.to_string()
                } else {
                    format!("{location}: {error}")
                }
            })
            .collect();

        if !problems.is_empty() {
            anyhow::bail!(
                "Chart.yaml missing required fields:\n  - {}",
                problems.join("\n  - ")
            );
        }

        Ok(())
    }
}
