mod generate;
mod inspect;
mod list;
mod render;
mod template;
mod validate;

pub use generate::{GenerateArgs, generate_command};
pub use inspect::{InspectArgs, inspect_command};
pub use list::{ListArgs, list_command};
pub use render::{RenderArgs, render_command};
pub use template::{TemplateArgs, template_command};
pub use validate::{ValidateArgs, validate_command};

use anyhow::{Context, Result};
use dashboard_manager::models::Dashboard;
use dashboard_manager::validation::error::JsonParseError;
use std::path::Path;

/// Read and decode a dashboard file, printing a source-pointing report on bad JSON
pub(crate) fn read_dashboard(path: &Path) -> Result<Dashboard> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file {}", path.display()))?;

    match Dashboard::from_json(&content) {
        Ok(dashboard) => Ok(dashboard),
        Err(e) => {
            let err = JsonParseError::from_serde_error(&e, content, path);
            eprintln!();
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("invalid JSON in {}", path.display())
        }
    }
}
