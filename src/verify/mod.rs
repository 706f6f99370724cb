//! Validation and pre-flight checks for a replacement run.

pub mod preflight;
pub mod prompt;
pub mod rules;

pub use preflight::{check_project_root, name_already_in_use};
pub use prompt::confirm_name_reuse;
pub use rules::{ProjectName, validate_project_name};
