mod chart;
mod dashboard;
pub mod error;
pub mod panel_types;
mod schemas;


pub use chart::ChartValidator;
pub use dashboard::{DashboardValidator, validate_dashboard};
pub use error::{DashboardFileError, DashboardValidationError, ValidationError, Violation};
pub use panel_types::{QueryPanelType, is_query_panel};
