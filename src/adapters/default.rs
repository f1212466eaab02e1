//! `$XENVIRONMENT` / `.Xresources` / `.Xdefaults` default chain.

use std::path::PathBuf;

use super::file::database_from_file;
use crate::error::ResourceError;
use crate::model::Database;

/// Compose the conventional default database: `$XENVIRONMENT` if set,
/// then `$HOME/.Xresources` (preferred) or `$HOME/.Xdefaults`, each
/// later source overriding the former on conflict (spec.md §6).
///
/// This crate has no display connection, so the resource-manager
/// property step of the original `XrmGetFileDatabase`/`XrmParseCommand`
/// chain is intentionally absent here; see
/// [`database_from_resource_property`](super::database_from_resource_property)
/// for a caller-supplied alternative.
pub fn database_from_default() -> Result<Database, ResourceError> {
    let mut db = Database::new();

    if let Ok(path) = std::env::var("XENVIRONMENT") {
        let mut loaded = database_from_file(&PathBuf::from(path))?;
        loaded.combine_into(&mut db, true);
    }

    if let Ok(home) = std::env::var("HOME") {
        let home = PathBuf::from(home);
        let xresources = home.join(".Xresources");
        let xdefaults = home.join(".Xdefaults");
        let candidate = if xresources.is_file() {
            Some(xresources)
        } else if xdefaults.is_file() {
            Some(xdefaults)
        } else {
            None
        };
        if let Some(path) = candidate {
            let mut loaded = database_from_file(&path)?;
            loaded.combine_into(&mut db, true);
        }
    }

    Ok(db)
}
