pub mod dashboard;
pub mod values;

// Re-export commonly used types
pub use dashboard::{
    Dashboard, DashboardMetadata, FieldConfig, FieldDefaults, GridPos, Panel, Target, Templating,
    TemplateVariable, TimeRange,
};
pub use values::{GrafanaOperator, InstanceSelector, Values};
