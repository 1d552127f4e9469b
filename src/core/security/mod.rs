//! Security module for file output validation.

mod output_path;

pub use output_path::{OutputPathError, validate_output_path};
