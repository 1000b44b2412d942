//! cqrs-scaffold: project generator CLI.
//!
//! `new` generates an application from the shipped template tree;
//! `ui` vendors the shared UI-component tree into an existing project.
//!
//! ## Configuration
//! - CQRS_SCAFFOLD_LOG: log filter (default: info)
//! - CQRS_SCAFFOLD_TEMPLATES: template directory override for `new`
//! - CQRS_SCAFFOLD_CONFIG: configuration file path

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use cqrs_scaffold::config::{Config, TEMPLATES_ENV_VAR};
use cqrs_scaffold::scaffold::{
    generate_project, install_ui, NewProjectOptions, UiComponent, UiInstallOptions,
};
use cqrs_scaffold::utils::bootstrap::init_tracing;

#[derive(Parser)]
#[command(
    name = "cqrs-scaffold",
    version,
    about = "Scaffolding for serverless CQRS applications"
)]
struct Cli {
    /// Configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new application from the template tree.
    New {
        /// Package name of the generated application.
        name: String,
        /// Framework dependency version pinned in the generated manifest.
        #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
        ver: String,
        /// Template directory override.
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Skip `git init` in the generated directory.
        #[arg(long)]
        skip_git: bool,
    },
    /// Install the shared UI-component tree into the current project.
    Ui {
        /// Directory to install into, relative to the project root.
        #[arg(long, default_value = "src/ui")]
        path_dir: String,
        /// Element to install.
        #[arg(long, value_enum, default_value_t = UiComponentArg::All)]
        component: UiComponentArg,
        /// Branch to clone.
        #[arg(long, default_value = "main")]
        branch: String,
        /// Clone URL override.
        #[arg(long)]
        repo_url: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UiComponentArg {
    All,
    Appsync,
    Component,
}

impl From<UiComponentArg> for UiComponent {
    fn from(arg: UiComponentArg) -> Self {
        match arg {
            UiComponentArg::All => UiComponent::All,
            UiComponentArg::Appsync => UiComponent::Appsync,
            UiComponentArg::Component => UiComponent::Component,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::New {
            name,
            ver,
            template_dir,
            skip_git,
        } => {
            let template_dir = template_dir
                .or_else(|| std::env::var(TEMPLATES_ENV_VAR).ok().map(PathBuf::from))
                .or_else(|| config.scaffold.template_dir.clone())
                .unwrap_or_else(default_template_dir);

            let dest = generate_project(&NewProjectOptions {
                name,
                dest_root: std::env::current_dir()?,
                template_dir,
                framework_version: ver,
                skip_git,
            })
            .await?;
            info!(dest = %dest.display(), "application generated");
        }
        Commands::Ui {
            path_dir,
            component,
            branch,
            repo_url,
        } => {
            let dest = install_ui(&UiInstallOptions {
                project_root: std::env::current_dir()?,
                path_dir,
                component: component.into(),
                branch,
                repo_url: repo_url.unwrap_or_else(|| config.scaffold.ui_repo_url.clone()),
            })
            .await?;
            info!(dest = %dest.display(), "UI components installed");
        }
    }

    Ok(())
}

/// Template tree shipped next to the installed binary, falling back to the
/// repository checkout during development.
fn default_template_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let shipped = dir.join("templates/app");
            if shipped.is_dir() {
                return shipped;
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates/app")
}
