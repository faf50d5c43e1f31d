//! Error handling for dappforge.
//! Defines the error taxonomy of the generation pipeline and the result alias
//! used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors raised while generating an application.
///
/// Every variant is fatal to a generation run: nothing retries, and the caller
/// must treat a failed run as "no usable project was produced".
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed, missing or unrecognized options. Raised before any mutation.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A named template bundle does not exist or cannot be read.
    #[error("Cannot resolve template bundle '{bundle}': {reason}.")]
    TemplateResolutionError { bundle: String, reason: String },

    /// Materialization would overwrite a tracked path it does not own.
    #[error("Path '{path}' already exists with different content.")]
    PathConflictError { path: String },

    /// The dependency manifest could not be read or updated.
    #[error("Dependency injection error: {0}.")]
    DependencyInjectionError(String),

    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The workspace configuration file is invalid.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Install error: {0}.")]
    InstallError(String),

    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Errors from external collaborators, surfaced unchanged.
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

/// Convenience type alias for results using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
