pub mod error_utils;
pub mod helm;
pub mod loader;
pub mod models;
pub mod templating;
pub mod validation;
