//! Companion on-chain program generation.

use crate::constants::ANCHOR_DIR;
use crate::error::Result;
use crate::loader::BundleLoader;
use crate::options::AnchorTemplate;
use crate::processor::Processor;
use crate::renderer::TemplateRenderer;
use crate::substitutions::{underscore, SubstitutionMap, Token};
use crate::tree::Tree;
use crate::workspace::{add_project_configuration, path_to_string, ProjectConfiguration};
use cruet::Inflector;
use log::info;
use std::path::Path;

/// What to generate for the companion program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionRequest {
    pub name: String,
    pub template: AnchorTemplate,
    pub skip_format: bool,
}

/// Generates and registers a companion program project.
pub trait CompanionGenerator {
    fn generate(&self, tree: &mut Tree, request: &CompanionRequest) -> Result<()>;
}

/// Materializes the `anchor-<template>` bundle into `anchor/`.
pub struct BundleCompanionGenerator<'a> {
    loader: &'a dyn BundleLoader,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> BundleCompanionGenerator<'a> {
    pub fn new(loader: &'a dyn BundleLoader, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { loader, renderer }
    }
}

/// Tokens available to companion bundles.
pub fn companion_substitutions(request: &CompanionRequest) -> SubstitutionMap {
    let name = request.name.as_str();
    [
        (Token::Name, name.to_string()),
        (Token::FileName, name.to_string()),
        (Token::FileNameUnderscore, underscore(name)),
        (Token::ClassName, name.to_pascal_case()),
        (Token::PropertyName, name.to_camel_case()),
        (Token::ConstantName, name.to_screaming_snake_case()),
        (Token::Anchor, request.template.to_string()),
    ]
    .into_iter()
    .map(|(token, value)| (token.key(), value))
    .collect()
}

impl CompanionGenerator for BundleCompanionGenerator<'_> {
    fn generate(&self, tree: &mut Tree, request: &CompanionRequest) -> Result<()> {
        let bundle = self.loader.load(&format!("anchor-{}", request.template))?;
        let substitutions = companion_substitutions(request);

        Processor::new(self.renderer).materialize(tree, &bundle, ANCHOR_DIR, &substitutions)?;

        let source_root = Path::new(ANCHOR_DIR).join("src");
        add_project_configuration(
            tree,
            &ProjectConfiguration {
                name: request.name.clone(),
                root: ANCHOR_DIR.to_string(),
                source_root: Some(path_to_string(&source_root)),
                project_type: Some("library".to_string()),
            },
        )?;
        info!("Generated companion program '{}' from template '{}'.", request.name, request.template);
        Ok(())
    }
}
