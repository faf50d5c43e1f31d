//! Deferred dependency installation.

use crate::error::{Error, Result};
use crate::tree::Commit;
use log::info;
use std::path::Path;
use std::process::{Command, Stdio};
use std::rc::Rc;

/// Installs workspace dependencies.
pub trait Installer {
    fn install(&self, workspace_root: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Picks the package manager from the lock file present in `root`.
    pub fn detect(root: &Path) -> Self {
        if root.join("bun.lockb").exists() {
            PackageManager::Bun
        } else if root.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else if root.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }
}

/// Runs `<package manager> install` in the workspace root.
#[derive(Debug, Default)]
pub struct PackageManagerInstaller;

impl PackageManagerInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl Installer for PackageManagerInstaller {
    fn install(&self, workspace_root: &Path) -> Result<()> {
        let package_manager = PackageManager::detect(workspace_root);
        info!("Installing dependencies with {}.", package_manager.command());

        let status = Command::new(package_manager.command())
            .arg("install")
            .current_dir(workspace_root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                Error::InstallError(format!("failed to run {}: {}", package_manager.command(), e))
            })?;

        if !status.success() {
            return Err(Error::InstallError(format!(
                "{} install failed with status: {}",
                package_manager.command(),
                status
            )));
        }
        Ok(())
    }
}

/// Action returned by a generation run, to be run once its changes are committed.
pub struct PostInstallTask {
    installer: Rc<dyn Installer>,
}

impl PostInstallTask {
    pub fn new(installer: Rc<dyn Installer>) -> Self {
        Self { installer }
    }

    /// Runs the installer in the committed workspace.
    ///
    /// Requiring the [`Commit`] keeps installation after every write.
    pub fn run(&self, commit: &Commit) -> Result<()> {
        self.installer.install(&commit.root)
    }
}

impl std::fmt::Debug for PostInstallTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostInstallTask").finish_non_exhaustive()
    }
}
