//! Project scaffolding.
//!
//! The engine behind the CLI: generates new applications from a template
//! tree and vendors the shared UI-component tree into an existing project.

use std::path::{Path, PathBuf};

mod manifest;
mod project;
mod ui;

pub use manifest::{merge_dependencies, patch_new_manifest};
pub use project::{generate_project, NewProjectOptions};
pub use ui::{install_ui, UiComponent, UiInstallOptions};

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors raised while scaffolding.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest parse error: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("manifest write error: {0}")]
    ManifestWrite(#[from] toml::ser::Error),

    #[error("failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("template directory not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("template manifest {} is missing {table}", path.display())]
    TemplateManifest { path: PathBuf, table: &'static str },

    #[error("not a project root (no Cargo.toml): {}", .0.display())]
    NotProjectRoot(PathBuf),

    #[error("UI components already installed at {0}")]
    AlreadyInstalled(String),
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}
