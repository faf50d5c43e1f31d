//! Interactive completion of missing options.

use crate::error::{Error, Result};
use crate::options::{AnchorTemplate, RawOptions, UiChoice};
use dialoguer::{Input, Select};

/// Asks the user for values.
pub trait Prompter {
    /// Free text answer.
    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Index of the chosen item.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Prompts for the name, ui and anchor template when they are unset.
pub fn complete_options(prompter: &dyn Prompter, mut raw: RawOptions) -> Result<RawOptions> {
    if raw.name.is_none() {
        raw.name = Some(prompter.text("What is the name of the application?", None)?);
    }
    if raw.ui.is_none() {
        let choice = prompter.select("Which UI library would you like to use?", &UiChoice::VARIANTS, 0)?;
        raw.ui = UiChoice::VARIANTS.get(choice).map(|ui| ui.to_string());
    }
    if raw.anchor.is_none() {
        let choice = prompter.select(
            "Which Anchor template would you like to use?",
            &AnchorTemplate::VARIANTS,
            0,
        )?;
        raw.anchor = AnchorTemplate::VARIANTS.get(choice).map(|anchor| anchor.to_string());
    }
    Ok(raw)
}
