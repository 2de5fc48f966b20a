// ABOUTME: Core types and utilities for Taskpad
// ABOUTME: Data directory resolution, environment configuration, and task form validation

pub mod config;
pub mod constants;
pub mod validation;

// Re-export configuration
pub use config::{Config, ConfigError};

// Re-export constants
pub use constants::{database_file, session_file, taskpad_dir};

// Re-export validation
pub use validation::{
    validate_task_input, ValidationError, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN,
};
