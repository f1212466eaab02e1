//! xresourcedb: an X-style resource database core.
//!
//! Dotted-path entries (`First.second*third: value`) are parsed into a
//! component sequence with per-position binding (`.` tight, `*`
//! loose), held in an ordered [`Database`](model::Database), and
//! resolved against a query name/class pair using the classical
//! tight-beats-loose, name-beats-class-beats-wildcard precedence
//! rules.

pub mod adapters;
pub mod error;
pub mod matcher;
pub mod model;
pub mod parser;
mod util;

pub use error::ResourceError;
pub use matcher::{get_bool, get_long, get_string};
pub use model::{Binding, Component, Database, Entry};
pub use parser::{parse_entry, ParseMode};

/// Parse `name`/`class` path strings and resolve them against `db`,
/// returning the raw value bytes of the winning entry (spec.md §6).
pub fn resource_get_string<'a>(db: &'a Database, name: &str, class: &str) -> Result<&'a [u8], ResourceError> {
    get_string(db, name, class)
}

/// As [`resource_get_string`], converted to a decimal integer (spec.md §7).
pub fn resource_get_long(db: &Database, name: &str, class: &str) -> Result<i64, ResourceError> {
    get_long(db, name, class)
}

/// As [`resource_get_string`], converted to a boolean (spec.md §7).
pub fn resource_get_bool(db: &Database, name: &str, class: &str) -> Result<bool, ResourceError> {
    get_bool(db, name, class)
}
