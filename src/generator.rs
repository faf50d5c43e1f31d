//! Application generation pipeline.
//! Orchestrates normalization, templating, dependency edits, styling, companion
//! generation and formatting into a single run over a [`Tree`].

use crate::{
    application::{ApplicationFactory, ProjectDescriptor},
    companion::{CompanionGenerator, CompanionRequest},
    constants::{
        ANCHOR_CLIENT_DEPENDENCY, APPLICATION_DEPENDENCIES, BASE_BUNDLE, DEFAULT_APP_FILES,
        WALLET_ADAPTER_DEPENDENCIES,
    },
    error::Result,
    format::Formatter,
    install::{Installer, PostInstallTask},
    loader::BundleLoader,
    options::{normalize, NormalizedOptions, RawOptions, UiChoice},
    processor::Processor,
    renderer::TemplateRenderer,
    substitutions::{resolve_substitutions, SubstitutionMap},
    tailwind::application_tailwind_config,
    tree::Tree,
    workspace::{add_dependencies_to_package_json, application_cleanup, get_npm_scope, get_projects},
};
use log::{debug, info, warn};
use std::rc::Rc;

/// Collaborators a generation run talks to.
pub struct Generator<'a> {
    pub loader: &'a dyn BundleLoader,
    pub renderer: &'a dyn TemplateRenderer,
    pub application_factory: &'a dyn ApplicationFactory,
    pub companion_generator: &'a dyn CompanionGenerator,
    pub formatter: &'a dyn Formatter,
    pub installer: Rc<dyn Installer>,
}

/// Outcome of a generation run: the staged project and the action to run
/// after the caller commits the tree.
#[derive(Debug)]
pub struct Generation {
    pub options: NormalizedOptions,
    pub project: ProjectDescriptor,
    pub post_install: PostInstallTask,
}

/// Dependencies declared for every generated application.
pub fn application_dependencies(options: &NormalizedOptions) -> Vec<(&'static str, &'static str)> {
    let mut dependencies: Vec<_> = APPLICATION_DEPENDENCIES
        .iter()
        .chain(WALLET_ADAPTER_DEPENDENCIES.iter())
        .copied()
        .collect();
    if options.anchor().is_enabled() {
        dependencies.push(ANCHOR_CLIENT_DEPENDENCY);
    }
    dependencies
}

impl Generator<'_> {
    /// Materializes a bundle under the project root.
    fn materialize(
        &self,
        tree: &mut Tree,
        bundle: &str,
        project: &ProjectDescriptor,
        substitutions: &SubstitutionMap,
    ) -> Result<()> {
        let bundle = self.loader.load(bundle)?;
        Processor::new(self.renderer).materialize(tree, &bundle, &project.root, substitutions)?;
        Ok(())
    }

    /// Generates an application into `tree`.
    ///
    /// Changes are only staged. The caller commits the tree and then runs
    /// [`Generation::post_install`] to install dependencies.
    ///
    /// # Flow
    /// 1. Normalizes options
    /// 2. Resolves the npm scope
    /// 3. Creates the application skeleton
    /// 4. Removes the skeleton's default files
    /// 5. Materializes the `base` bundle
    /// 6. Materializes the UI bundle
    /// 7. Declares application dependencies
    /// 8. Configures tailwind when selected
    /// 9. Generates the companion program unless one with that name exists
    /// 10. Formats staged files unless skipped
    pub fn generate(&self, tree: &mut Tree, raw: RawOptions) -> Result<Generation> {
        let options = normalize(raw)?;
        debug!("Normalized options: {options:?}");

        let npm_scope = get_npm_scope(tree)?;
        let substitutions = resolve_substitutions(&options, npm_scope.as_deref());

        let project = self.application_factory.create(tree, &options)?;
        application_cleanup(tree, project.source_root.join("app"), &DEFAULT_APP_FILES);

        self.materialize(tree, BASE_BUNDLE, &project, &substitutions)?;
        self.materialize(tree, options.ui().as_str(), &project, &substitutions)?;

        add_dependencies_to_package_json(tree, &application_dependencies(&options), &[])?;

        if options.ui() == UiChoice::Tailwind {
            application_tailwind_config(tree, &project.configuration())?;
        }

        if options.anchor().is_enabled() {
            if get_projects(tree)?.contains_key(options.anchor_name()) {
                warn!(
                    "Project '{}' already exists, skipping companion program generation.",
                    options.anchor_name()
                );
            } else {
                let request = CompanionRequest {
                    name: options.anchor_name().to_string(),
                    template: options.anchor(),
                    skip_format: true,
                };
                self.companion_generator.generate(tree, &request)?;
            }
        }

        if !options.skip_format() {
            self.formatter.format(tree)?;
        }

        info!("Generated application '{}' in '{}'.", options.web_name(), project.root.display());
        Ok(Generation {
            options,
            project,
            post_install: PostInstallTask::new(Rc::clone(&self.installer)),
        })
    }
}
