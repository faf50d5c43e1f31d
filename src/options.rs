//! Options normalization.
//! Turns loosely typed user input into the canonical record every later
//! generation step reads from.

use crate::error::{Error, Result};
use cruet::Inflector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User supplied options, as parsed from the command line, stdin or the
/// workspace configuration file. Nothing here is validated yet.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOptions {
    #[serde(alias = "webName")]
    pub name: Option<String>,
    pub ui: Option<String>,
    pub anchor: Option<String>,
    pub anchor_name: Option<String>,
    pub skip_format: Option<bool>,
}

impl RawOptions {
    /// Fills every field that is unset in `self` from `other`.
    pub fn or(self, other: RawOptions) -> RawOptions {
        RawOptions {
            name: self.name.or(other.name),
            ui: self.ui.or(other.ui),
            anchor: self.anchor.or(other.anchor),
            anchor_name: self.anchor_name.or(other.anchor_name),
            skip_format: self.skip_format.or(other.skip_format),
        }
    }
}

/// UI variant materialized on top of the base bundle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UiChoice {
    #[default]
    None,
    Tailwind,
}

impl UiChoice {
    pub const VARIANTS: [&'static str; 2] = ["none", "tailwind"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiChoice::None => "none",
            UiChoice::Tailwind => "tailwind",
        }
    }
}

impl FromStr for UiChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "none" => Ok(UiChoice::None),
            "tailwind" => Ok(UiChoice::Tailwind),
            other => Err(Error::ValidationError(format!(
                "unknown ui '{}', expected one of: {}",
                other,
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for UiChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template used for the companion on-chain program.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTemplate {
    #[default]
    None,
    Basic,
    Counter,
}

impl AnchorTemplate {
    pub const VARIANTS: [&'static str; 3] = ["none", "basic", "counter"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorTemplate::None => "none",
            AnchorTemplate::Basic => "basic",
            AnchorTemplate::Counter => "counter",
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self != AnchorTemplate::None
    }
}

impl FromStr for AnchorTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "none" => Ok(AnchorTemplate::None),
            // Plain `anchor` selects the minimal program.
            "basic" | "anchor" => Ok(AnchorTemplate::Basic),
            "counter" => Ok(AnchorTemplate::Counter),
            other => Err(Error::ValidationError(format!(
                "unknown anchor template '{}', expected one of: {}",
                other,
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for AnchorTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical, validated options. Produced once per run by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOptions {
    web_name: String,
    anchor_name: String,
    ui: UiChoice,
    anchor: AnchorTemplate,
    skip_format: bool,
}

impl NormalizedOptions {
    /// Kebab-case application name.
    pub fn web_name(&self) -> &str {
        &self.web_name
    }

    /// Kebab-case companion program name.
    pub fn anchor_name(&self) -> &str {
        &self.anchor_name
    }

    pub fn ui(&self) -> UiChoice {
        self.ui
    }

    pub fn anchor(&self) -> AnchorTemplate {
        self.anchor
    }

    pub fn skip_format(&self) -> bool {
        self.skip_format
    }
}

/// Checks that `name` can be used as a package and directory name.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    starts_with_letter
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !name.ends_with('-')
        && !name.contains("--")
}

fn normalize_name(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::ValidationError(format!("{field} must not be empty")));
    }
    let kebab = trimmed.to_kebab_case();
    if !is_valid_name(&kebab) {
        return Err(Error::ValidationError(format!(
            "{field} '{trimmed}' is not a valid project name"
        )));
    }
    Ok(kebab)
}

/// Validates raw options and applies the default policy.
///
/// # Errors
/// * `Error::ValidationError` if the name is missing or invalid, or if `ui`
///   or `anchor` hold an unrecognized value
pub fn normalize(raw: RawOptions) -> Result<NormalizedOptions> {
    let name = raw
        .name
        .as_deref()
        .ok_or_else(|| Error::ValidationError("name is required".to_string()))?;
    let web_name = normalize_name("name", name)?;

    let ui = match raw.ui.as_deref() {
        Some(ui) => ui.parse()?,
        None => UiChoice::default(),
    };
    let anchor = match raw.anchor.as_deref() {
        Some(anchor) => anchor.parse()?,
        None => AnchorTemplate::default(),
    };
    let anchor_name = match raw.anchor_name.as_deref() {
        Some(anchor_name) => normalize_name("anchor name", anchor_name)?,
        None => format!("{web_name}-anchor"),
    };

    Ok(NormalizedOptions {
        web_name,
        anchor_name,
        ui,
        anchor,
        skip_format: raw.skip_format.unwrap_or(false),
    })
}
