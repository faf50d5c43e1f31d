//! dappforge's main application entry point.
//! Handles command-line argument parsing, gathers options from every source,
//! runs the generator and commits its changes.

use std::rc::Rc;

use dappforge::{
    application::SkeletonFactory,
    cli::{get_args, Args},
    companion::BundleCompanionGenerator,
    config::{get_config, load_from_reader},
    error::{default_error_handler, Result},
    format::JsonFormatter,
    generator::Generator,
    install::PackageManagerInstaller,
    loader::LocalLoader,
    logger::init_logger,
    options::RawOptions,
    prompt::{complete_options, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    tree::{ChangeKind, Tree},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Merges options from flags, stdin and the workspace configuration
/// 2. Prompts for whatever is still missing, unless non-interactive
/// 3. Runs the generator against the workspace tree
/// 4. Commits the staged changes (or prints them on a dry run)
/// 5. Installs dependencies
fn run(args: Args) -> Result<()> {
    let stdin_options = if args.stdin {
        load_from_reader(std::io::stdin().lock())?
    } else {
        RawOptions::default()
    };
    let raw = args.raw_options().or(stdin_options).or(get_config(&args.workspace)?);
    let raw = if args.non_interactive || args.stdin {
        raw
    } else {
        complete_options(&DialoguerPrompter::new(), raw)?
    };

    let loader = LocalLoader::new(&args.templates);
    let renderer = MiniJinjaRenderer::new();
    let application_factory = SkeletonFactory::new();
    let companion_generator = BundleCompanionGenerator::new(&loader, &renderer);
    let formatter = JsonFormatter::new();

    let generator = Generator {
        loader: &loader,
        renderer: &renderer,
        application_factory: &application_factory,
        companion_generator: &companion_generator,
        formatter: &formatter,
        installer: Rc::new(PackageManagerInstaller::new()),
    };

    let mut tree = Tree::new(&args.workspace);
    let generation = generator.generate(&mut tree, raw)?;

    if args.dry_run {
        for change in tree.list_changes() {
            let action = match change.kind {
                ChangeKind::Create(_) => "CREATE",
                ChangeKind::Update(_) => "UPDATE",
                ChangeKind::Delete => "DELETE",
            };
            println!("{}: '{}'", action, change.path.display());
        }
        println!("Dry run: no changes were written.");
        return Ok(());
    }

    let commit = tree.commit()?;
    for path in &commit.written {
        println!("WRITE: '{}'", path.display());
    }
    for path in &commit.deleted {
        println!("DELETE: '{}'", path.display());
    }

    if !args.skip_install {
        generation.post_install.run(&commit)?;
    }

    println!(
        "Application '{}' generated successfully in {}.",
        generation.options.web_name(),
        commit.root.join(&generation.project.root).display()
    );
    Ok(())
}
