//! New-project generation.

use std::fs;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::info;

use super::manifest::patch_new_manifest;
use super::{io_error, Result, ScaffoldError};

/// Options for generating a new application.
pub struct NewProjectOptions {
    /// Package name; the project lands at `<dest_root>/<name>`.
    pub name: String,
    /// Directory the project directory is created under.
    pub dest_root: PathBuf,
    /// Template tree to copy.
    pub template_dir: PathBuf,
    /// Version of the framework dependency pinned in the manifest.
    pub framework_version: String,
    /// Skip `git init` in the generated directory.
    pub skip_git: bool,
}

/// Generate a new application from the template tree.
///
/// Copies the template, patches the manifest, renames `gitignore` to
/// `.gitignore`, seeds `.env` from `.env.local`, and initializes a git
/// repository in the new directory. Returns the generated directory.
pub async fn generate_project(options: &NewProjectOptions) -> Result<PathBuf> {
    if !options.template_dir.is_dir() {
        return Err(ScaffoldError::TemplateMissing(options.template_dir.clone()));
    }

    let dest = options.dest_root.join(&options.name);
    info!(dest = %dest.display(), "generating application");
    fs::create_dir_all(&dest).map_err(|e| io_error(&dest, e))?;
    copy_tree(&options.template_dir, &dest)?;

    patch_new_manifest(
        &dest.join("Cargo.toml"),
        &options.name,
        &options.framework_version,
    )?;

    // The template ships `gitignore` unsuffixed so the template tree itself
    // stays tracked.
    let gitignore = dest.join("gitignore");
    if gitignore.is_file() {
        fs::rename(&gitignore, dest.join(".gitignore")).map_err(|e| io_error(&gitignore, e))?;
    }

    let env_local = dest.join(".env.local");
    if env_local.is_file() {
        fs::copy(&env_local, dest.join(".env")).map_err(|e| io_error(&env_local, e))?;
    }

    if !options.skip_git {
        run_in(&dest, "git", &["init"]).await?;
    }

    Ok(dest)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in fs::read_dir(src).map_err(|e| io_error(src, e))? {
        let entry = entry.map_err(|e| io_error(src, e))?;
        let target = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| io_error(&entry.path(), e))?;
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| io_error(&target, e))?;
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| io_error(&target, e))?;
        }
    }
    Ok(())
}

/// Run a command in `dir`, failing on a non-zero exit status.
pub(crate) async fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let rendered = format!("{} {}", program, args.join(" "));
    info!(command = %rendered, dir = %dir.display(), "running");

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .await
        .map_err(|e| ScaffoldError::CommandSpawn {
            command: rendered.clone(),
            source: e,
        })?;

    if !status.success() {
        return Err(ScaffoldError::CommandFailed {
            command: rendered,
            status,
        });
    }
    Ok(())
}
