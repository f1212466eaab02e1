//! Public query surface (spec.md §6, §4.4.4): resolve a name/class
//! pair against a database and convert the result to scalar types.

use super::engine::select_best;
use crate::error::ResourceError;
use crate::model::{Component, Database, Entry};
use crate::parser::{parse_entry, ParseMode};

/// Resolve `name`/`class` against `db` and return the winning entry's
/// raw value bytes. `class` may be empty, in which case class-bound
/// entries never participate in the match.
pub fn get_string<'a>(db: &'a Database, name: &str, class: &str) -> Result<&'a [u8], ResourceError> {
    let query_name = parse_entry(name.as_bytes(), ParseMode::QueryOnly).map_err(|_| ResourceError::NotFound)?;
    let trimmed_class = class.trim();
    let query_class = if trimmed_class.is_empty() {
        None
    } else {
        Some(parse_entry(trimmed_class.as_bytes(), ParseMode::QueryOnly).map_err(|_| ResourceError::NotFound)?)
    };

    if let Some(qc) = &query_class {
        if qc.len() != query_name.len() {
            return Err(ResourceError::NotFound);
        }
    }

    let name_path = path_names(&query_name);
    let class_path: Option<Vec<&str>> = query_class.as_ref().map(path_names);

    select_best(db.entries(), &name_path, class_path.as_deref())
        .map(|(entry, _)| entry.value().unwrap_or(&[]))
        .ok_or(ResourceError::NotFound)
}

fn path_names(entry: &Entry) -> Vec<&str> {
    entry
        .components()
        .iter()
        .map(|(_, c)| match c {
            Component::Normal(name) => name.as_str(),
            Component::Wildcard => unreachable!("query entries never contain wildcards"),
        })
        .collect()
}

/// `get_string` plus a decimal integer conversion (spec.md §7).
pub fn get_long(db: &Database, name: &str, class: &str) -> Result<i64, ResourceError> {
    let value = get_string(db, name, class)?;
    let text = std::str::from_utf8(value).map_err(|_| invalid_conversion("integer", value))?;
    text.trim().parse::<i64>().map_err(|_| invalid_conversion("integer", value))
}

/// `get_string` plus a boolean conversion (spec.md §7). Accepts a
/// nonzero/zero integer or the case-insensitive words
/// `true|on|yes` / `false|off|no`.
pub fn get_bool(db: &Database, name: &str, class: &str) -> Result<bool, ResourceError> {
    let value = get_string(db, name, class)?;
    let text = std::str::from_utf8(value).map_err(|_| invalid_conversion("bool", value))?;
    let trimmed = text.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n != 0);
    }
    if eq_ci(trimmed, "true") || eq_ci(trimmed, "on") || eq_ci(trimmed, "yes") {
        return Ok(true);
    }
    if eq_ci(trimmed, "false") || eq_ci(trimmed, "off") || eq_ci(trimmed, "no") {
        return Ok(false);
    }
    Err(invalid_conversion("bool", value))
}

fn invalid_conversion(expected: &'static str, value: &[u8]) -> ResourceError {
    ResourceError::InvalidConversion {
        expected,
        value: String::from_utf8_lossy(value).into_owned(),
    }
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.len() == b.len() && crate::util::starts_with_ci(a, b)
}
