use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::error::{
    DashboardFileError, DashboardValidationError, JsonParseError, ValidationError, Violation,
};
use super::panel_types::is_query_panel;
use crate::models::{Dashboard, Panel, TemplateVariable};

/// Structural checks for Grafana dashboard documents.
///
/// Holds no state between calls: seen-id and seen-name bookkeeping is
/// allocated fresh for every dashboard, so one validator can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardValidator;

impl DashboardValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a decoded dashboard, reporting every violation at once
    pub fn validate(&self, dashboard: &Dashboard) -> Result<(), DashboardValidationError> {
        let errors = self.collect_errors(dashboard);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DashboardValidationError { errors })
        }
    }

    /// Read, decode and validate a dashboard JSON file
    pub fn validate_file(&self, path: &Path) -> Result<Dashboard, DashboardFileError> {
        debug!("Validating dashboard {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| DashboardFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let dashboard = Dashboard::from_json(&content)
            .map_err(|e| JsonParseError::from_serde_error(&e, content.clone(), path))?;

        self.validate(&dashboard)?;
        Ok(dashboard)
    }

    /// Run every rule and return the violations in report order
    pub fn collect_errors(&self, dashboard: &Dashboard) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if dashboard.title.is_empty() {
            errors.push(ValidationError::new(
                Violation::MissingField("title"),
                "title",
                "title is required",
            ));
        }

        // Zero doubles as "absent"; a literal schemaVersion of 0 is reported as missing
        if dashboard.schema_version == 0 {
            errors.push(ValidationError::new(
                Violation::MissingField("schemaVersion"),
                "schemaVersion",
                "schemaVersion is required",
            ));
        }

        if dashboard.panels.is_empty() {
            errors.push(ValidationError::new(
                Violation::EmptyCollection("panels"),
                "panels",
                "at least one panel is required",
            ));
        }

        let mut panel_ids = HashSet::new();
        for (i, panel) in dashboard.panels.iter().enumerate() {
            Self::check_panel(i, panel, &mut panel_ids, &mut errors);
        }

        let mut variable_names = HashSet::new();
        for (i, variable) in dashboard.templating.list.iter().enumerate() {
            Self::check_variable(i, variable, &mut variable_names, &mut errors);
        }

        errors
    }

    fn check_panel(
        index: usize,
        panel: &Panel,
        seen_ids: &mut HashSet<i64>,
        errors: &mut Vec<ValidationError>,
    ) {
        if !seen_ids.insert(panel.id) {
            errors.push(ValidationError::new(
                Violation::DuplicateKey(panel.id.to_string()),
                format!("panels[{index}].id"),
                format!("duplicate panel ID: {}", panel.id),
            ));
        }

        if panel.panel_type.is_empty() {
            errors.push(ValidationError::new(
                Violation::MissingField("type"),
                format!("panels[{index}].type"),
                "panel type is required",
            ));
        }

        if panel.grid_pos.w <= 0 || panel.grid_pos.h <= 0 {
            errors.push(ValidationError::new(
                Violation::InvalidValue("gridPos"),
                format!("panels[{index}].gridPos"),
                "panel width and height must be positive",
            ));
        }

        if is_query_panel(&panel.panel_type) && panel.targets.is_empty() {
            errors.push(ValidationError::new(
                Violation::MissingField("targets"),
                format!("panels[{index}].targets"),
                "query panels must have at least one target",
            ));
        }

        for (j, target) in panel.targets.iter().enumerate() {
            if target.ref_id.is_empty() {
                errors.push(ValidationError::new(
                    Violation::MissingField("refId"),
                    format!("panels[{index}].targets[{j}].refId"),
                    "target refId is required",
                ));
            }
        }
    }

    fn check_variable<'a>(
        index: usize,
        variable: &'a TemplateVariable,
        seen_names: &mut HashSet<&'a str>,
        errors: &mut Vec<ValidationError>,
    ) {
        if variable.name.is_empty() {
            errors.push(ValidationError::new(
                Violation::MissingField("name"),
                format!("templating.list[{index}].name"),
                "variable name is required",
            ));
        }

        // Empty names are tracked too, so a second nameless variable is also a duplicate
        if !seen_names.insert(variable.name.as_str()) {
            errors.push(ValidationError::new(
                Violation::DuplicateKey(variable.name.clone()),
                format!("templating.list[{index}].name"),
                format!("duplicate variable name: {}", variable.name),
            ));
        }

        if variable.variable_type.is_empty() {
            errors.push(ValidationError::new(
                Violation::MissingField("type"),
                format!("templating.list[{index}].type"),
                "variable type is required",
            ));
        }
    }
}

/// Validate a decoded dashboard with a default validator
pub fn validate_dashboard(dashboard: &Dashboard) -> Result<(), DashboardValidationError> {
    DashboardValidator::new().validate(dashboard)
}
