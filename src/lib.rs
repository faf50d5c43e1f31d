//! dappforge generates wallet-enabled web applications from template bundles.
//! It normalizes user options, derives template tokens, materializes bundles
//! into a staged workspace tree and wires in dependencies, styling and an
//! optional companion on-chain program.

/// Base application skeleton creation
pub mod application;

/// Command-line interface module for dappforge
pub mod cli;

/// Companion program generation
pub mod companion;

/// Workspace option defaults
/// Supports JSON and YAML formats (dappforge.json, dappforge.yml, dappforge.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for dappforge
pub mod error;

/// Formatting of staged files
pub mod format;

/// Generation pipeline orchestration
pub mod generator;

/// Bundle ignore patterns
/// Processes .templateignore files to exclude specific paths
pub mod ignore;

/// Deferred dependency installation
pub mod install;

/// Template bundle resolution
pub mod loader;

pub mod logger;

/// Options validation and defaults
pub mod options;

/// Template bundle materialization
pub mod processor;

/// Interactive completion of missing options
pub mod prompt;

/// Template content rendering
pub mod renderer;

/// Token derivation
pub mod substitutions;

/// Tailwind styling configuration
pub mod tailwind;

/// Staged workspace file tree
pub mod tree;

/// Workspace queries and manifest edits
pub mod workspace;
