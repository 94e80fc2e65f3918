pub mod variables;

pub use variables::{VariableResolver, parse_var, substitute_variables};
