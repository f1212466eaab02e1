//! `#include "path"` resolution and file loading.
//!
//! Grounded on the teacher's `:r` directive expansion
//! (`src/parser/sqlcmd.rs`): directive lines are matched with a regex,
//! included paths are resolved relative to the including file, and a
//! canonicalized-path set guards against circular includes. Unlike the
//! teacher, expansion here operates line-by-line over raw bytes —
//! resource values need not be valid UTF-8, so only lines that happen
//! to decode as UTF-8 are even considered as directive candidates.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ResourceError;
use crate::model::Database;

static INCLUDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s*#include\s+"([^"]+)"\s*$"#).expect("invalid include regex"));

/// Read `path`, resolve every `#include` directive (recursively), and
/// parse the result as a database (spec.md §4.3).
pub fn database_from_file(path: &Path) -> Result<Database, ResourceError> {
    let canonical = canonicalize(path)?;
    let mut visited = HashSet::new();
    visited.insert(canonical.clone());
    let expanded = expand_includes(&canonical, &mut visited)?;
    Ok(Database::from_bytes(&expanded))
}

fn canonicalize(path: &Path) -> Result<PathBuf, ResourceError> {
    path.canonicalize().map_err(|source| ResourceError::FileReadError { path: path.to_path_buf(), source })
}

fn expand_includes(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Vec<u8>, ResourceError> {
    let content = std::fs::read(path).map_err(|source| ResourceError::FileReadError { path: path.to_path_buf(), source })?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut out = Vec::with_capacity(content.len());
    for (i, line) in content.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        match std::str::from_utf8(line).ok().and_then(|s| INCLUDE_RE.captures(s)) {
            Some(caps) => {
                let include_str = &caps[1];
                let include_path = Path::new(include_str);
                let resolved = if include_path.is_absolute() { include_path.to_path_buf() } else { dir.join(include_path) };
                let canonical = resolved.canonicalize().map_err(|_| ResourceError::IncludeNotFound {
                    path: resolved.clone(),
                    source_file: path.to_path_buf(),
                })?;

                if visited.contains(&canonical) {
                    let chain = visited.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(" -> ");
                    return Err(ResourceError::CircularInclude { path: canonical, chain });
                }

                visited.insert(canonical.clone());
                let expanded = expand_includes(&canonical, visited)?;
                visited.remove(&canonical);

                out.extend_from_slice(&expanded);
            }
            None => out.extend_from_slice(line),
        }
    }
    Ok(out)
}
