//! Command-line interface implementation for dappforge.
//! Provides argument parsing and help text formatting using clap.

use crate::options::RawOptions;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for dappforge.
#[derive(Parser, Debug)]
#[command(author, version, about = "dappforge: scaffold wallet-enabled web applications", long_about = None)]
pub struct Args {
    /// Name of the application to generate
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// UI library: none or tailwind
    #[arg(long)]
    pub ui: Option<String>,

    /// Anchor program template: none, basic or counter
    #[arg(long)]
    pub anchor: Option<String>,

    /// Name of the companion Anchor program (defaults to <NAME>-anchor)
    #[arg(long)]
    pub anchor_name: Option<String>,

    /// Skip formatting of generated files
    #[arg(long)]
    pub skip_format: bool,

    /// Workspace root the application is generated into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub workspace: PathBuf,

    /// Directory holding the template bundles
    #[arg(short, long, value_name = "DIR", default_value = "templates")]
    pub templates: PathBuf,

    /// Read options as JSON from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Never prompt for missing options
    #[arg(long)]
    pub non_interactive: bool,

    /// Do not install dependencies after generation
    #[arg(long)]
    pub skip_install: bool,

    /// Print the staged changes without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Options given as flags. Unset flags stay `None` so other sources can fill them.
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            name: self.name.clone(),
            ui: self.ui.clone(),
            anchor: self.anchor.clone(),
            anchor_name: self.anchor_name.clone(),
            skip_format: self.skip_format.then_some(true),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
