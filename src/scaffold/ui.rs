//! Shared UI-component installation.
//!
//! Vendors the shared UI tree into an existing project: clone a branch,
//! strip its `.git`, prune the subtrees the selected component does not
//! need, and merge the tree's declared dependencies into the host manifest.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::manifest::merge_dependencies;
use super::project::run_in;
use super::{io_error, Result, ScaffoldError};

/// Subtree holding the data-sync client.
const APPSYNC_DIR: &str = "appsync";
/// Subtrees holding the visual components.
const COMPONENT_DIRS: &[&str] = &["components", "lib", "modules", "styles", "types"];
/// Dependency only the data-sync client needs.
const SYNC_CLIENT_DEP: &str = "appsync-client";

/// Which part of the shared UI tree to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiComponent {
    All,
    Appsync,
    Component,
}

impl UiComponent {
    /// Dependency filter applied when merging the tree's manifest.
    fn wants_dependency(self, name: &str) -> bool {
        match self {
            UiComponent::All => true,
            UiComponent::Component => name != SYNC_CLIENT_DEP,
            UiComponent::Appsync => name == SYNC_CLIENT_DEP,
        }
    }
}

/// Options for installing the shared UI tree.
pub struct UiInstallOptions {
    /// Project root; must contain a Cargo.toml.
    pub project_root: PathBuf,
    /// Directory the tree is cloned into, relative to the root.
    pub path_dir: String,
    pub component: UiComponent,
    /// Branch to clone.
    pub branch: String,
    /// Clone URL, token-authenticated or SSH.
    pub repo_url: String,
}

/// Install the shared UI-component tree into an existing project.
///
/// Returns the directory the tree was installed into.
pub async fn install_ui(options: &UiInstallOptions) -> Result<PathBuf> {
    let host_manifest = options.project_root.join("Cargo.toml");
    if !host_manifest.is_file() {
        return Err(ScaffoldError::NotProjectRoot(options.project_root.clone()));
    }

    let dest = options.project_root.join(&options.path_dir);
    if dest.exists() {
        return Err(ScaffoldError::AlreadyInstalled(options.path_dir.clone()));
    }

    info!(
        dest = %dest.display(),
        branch = %options.branch,
        "installing shared UI components"
    );

    let dest_arg = dest.to_string_lossy().into_owned();
    run_in(
        &options.project_root,
        "git",
        &[
            "clone",
            "--branch",
            &options.branch,
            &options.repo_url,
            &dest_arg,
        ],
    )
    .await?;

    // The clone is vendored, not a submodule.
    remove_if_present(&dest.join(".git"))?;

    prune_tree(&dest, options.component)?;

    let source_manifest = dest.join("Cargo.toml");
    if source_manifest.is_file() {
        let component = options.component;
        merge_dependencies(&host_manifest, &source_manifest, |name| {
            component.wants_dependency(name)
        })?;
        remove_if_present(&source_manifest)?;
    }

    Ok(dest)
}

/// Delete the subtrees the selected component does not need.
fn prune_tree(dest: &Path, component: UiComponent) -> Result<()> {
    match component {
        UiComponent::All => {}
        UiComponent::Component => remove_if_present(&dest.join(APPSYNC_DIR))?,
        UiComponent::Appsync => {
            for dir in COMPONENT_DIRS {
                remove_if_present(&dest.join(dir))?;
            }
        }
    }
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| io_error(path, e))?;
    } else if path.is_file() {
        fs::remove_file(path).map_err(|e| io_error(path, e))?;
    }
    Ok(())
}
