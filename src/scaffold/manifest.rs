//! Manifest (Cargo.toml) patching.
//!
//! Generated projects and the vendored UI tree both carry TOML manifests;
//! scaffolding rewrites them in place. Formatting is not preserved, only
//! content.

use std::fs;
use std::path::Path;

use toml::value::Table;
use toml::Value;

use super::{io_error, Result, ScaffoldError};

/// Name of the framework dependency pinned in generated manifests.
pub(crate) const FRAMEWORK_DEP: &str = "cqrs-scaffold";

pub(crate) fn read_manifest(path: &Path) -> Result<Table> {
    let raw = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    Ok(toml::from_str(&raw)?)
}

pub(crate) fn write_manifest(path: &Path, manifest: &Table) -> Result<()> {
    let raw = toml::to_string_pretty(manifest)?;
    fs::write(path, raw).map_err(|e| io_error(path, e))
}

/// Set the generated package's name and pin its framework dependency.
///
/// A template manifest without a `[package]` or `[dependencies]` table is
/// broken and rejected outright.
pub fn patch_new_manifest(path: &Path, name: &str, framework_version: &str) -> Result<()> {
    let mut manifest = read_manifest(path)?;

    match manifest.get_mut("package") {
        Some(Value::Table(package)) => {
            package.insert("name".to_string(), Value::String(name.to_string()));
        }
        _ => {
            return Err(ScaffoldError::TemplateManifest {
                path: path.to_path_buf(),
                table: "[package]",
            })
        }
    }
    match manifest.get_mut("dependencies") {
        Some(Value::Table(deps)) => {
            deps.insert(
                FRAMEWORK_DEP.to_string(),
                Value::String(framework_version.to_string()),
            );
        }
        _ => {
            return Err(ScaffoldError::TemplateManifest {
                path: path.to_path_buf(),
                table: "[dependencies]",
            })
        }
    }

    write_manifest(path, &manifest)
}

/// Merge dependencies declared by `source` into the `host` manifest.
///
/// Existing host entries win; `filter` decides which source entries apply.
pub fn merge_dependencies(
    host: &Path,
    source: &Path,
    filter: impl Fn(&str) -> bool,
) -> Result<()> {
    let mut host_manifest = read_manifest(host)?;
    let source_manifest = read_manifest(source)?;

    let source_deps = match source_manifest.get("dependencies") {
        Some(Value::Table(table)) => table.clone(),
        _ => return Ok(()),
    };

    let host_deps = host_manifest
        .entry("dependencies".to_string())
        .or_insert_with(|| Value::Table(Table::new()));
    if let Value::Table(host_deps) = host_deps {
        for (name, version) in source_deps {
            if !filter(&name) {
                continue;
            }
            host_deps.entry(name).or_insert(version);
        }
    }

    write_manifest(host, &host_manifest)
}
