//! Ordered entry collection with identity-based replacement (spec.md §4.3).

use super::entry::escape_value;
use super::Entry;
use crate::error::ResourceError;
use crate::parser::{parse_entry, ParseMode};

/// An ordered sequence of full entries. Order is insertion order, with
/// replacements preserving the position rules of `insert_or_replace`
/// (spec.md §4.3).
#[derive(Debug, Clone, Default)]
pub struct Database {
    entries: Vec<Entry>,
}

impl Database {
    pub fn new() -> Self {
        Database { entries: Vec::new() }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse multi-line input (spec.md §4.3). Empty input yields an
    /// empty database; malformed lines are silently dropped.
    pub fn from_bytes(text: &[u8]) -> Database {
        let mut db = Database::new();
        for line in split_logical_lines(text) {
            db.load_line(&line);
        }
        db
    }

    /// Convenience wrapper over [`Database::from_bytes`] for UTF-8 input.
    pub fn from_str(text: &str) -> Database {
        Database::from_bytes(text.as_bytes())
    }

    fn load_line(&mut self, line: &[u8]) {
        if matches!(line.first(), Some(b'!') | Some(b'#')) {
            return;
        }
        if let Ok(entry) = parse_entry(line, ParseMode::FullEntry) {
            self.insert_or_replace(entry, true);
        }
    }

    /// Insert `entry`, replacing any specifier-equal entry already
    /// present. `override_` selects which of the two equal-conflict
    /// rules (spec.md §4.3) applies.
    pub fn insert_or_replace(&mut self, entry: Entry, override_: bool) {
        let mut i = 0;
        let mut discarded = false;
        while i < self.entries.len() {
            if self.entries[i].specifier_eq(&entry) {
                if override_ {
                    self.entries.remove(i);
                    continue;
                } else {
                    discarded = true;
                    break;
                }
            }
            i += 1;
        }
        if !discarded {
            self.entries.push(entry);
        }
    }

    /// Compose a canonical text line from `specifier` and an escaped
    /// `value`, then parse it back as an entry (spec.md §4.3). This
    /// yields exactly the escapes a user would have to write by hand.
    pub fn put_resource(&mut self, specifier: &str, value: &[u8]) -> Result<(), ResourceError> {
        let mut line = Vec::with_capacity(specifier.len() + value.len() + 2);
        line.extend_from_slice(specifier.as_bytes());
        line.extend_from_slice(b": ");
        line.extend_from_slice(&escape_value(value));
        let entry = parse_entry(&line, ParseMode::FullEntry)?;
        self.insert_or_replace(entry, true);
        Ok(())
    }

    /// Parse `line` directly, using the same comment/directive rules as
    /// [`Database::from_bytes`], then insert-or-replace with
    /// `override = true` (spec.md §4.3).
    pub fn put_resource_line(&mut self, line: &str) -> Result<(), ResourceError> {
        let bytes = line.as_bytes();
        if matches!(bytes.first(), Some(b'!') | Some(b'#')) {
            return Ok(());
        }
        let entry = parse_entry(bytes, ParseMode::FullEntry)?;
        self.insert_or_replace(entry, true);
        Ok(())
    }

    /// Drain every entry of `self` into `target`, using `override_` for
    /// each insertion (spec.md §4.3). `self` is empty afterwards.
    pub fn combine_into(&mut self, target: &mut Database, override_: bool) {
        for entry in self.entries.drain(..) {
            target.insert_or_replace(entry, override_);
        }
    }

    /// Concatenate each entry's canonical rendering, one per line, as
    /// raw bytes (spec.md §4.3). A `String` return would require every
    /// stored value to be valid UTF-8, which spec.md §3 explicitly does
    /// not require.
    pub fn to_text(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for entry in &self.entries {
            out.extend_from_slice(&entry.render());
            out.push(b'\n');
        }
        out
    }
}

/// Move every entry of `source` into `target`, using `override_` for
/// each insertion. Free function mirroring the conceptual
/// `database_combine(source, target, override)` API (spec.md §6).
pub fn combine(source: &mut Database, target: &mut Database, override_: bool) {
    source.combine_into(target, override_);
}

/// Collapse backslash-newline continuations, then split on raw `\n`
/// (spec.md §4.3). Operates on raw bytes since values need not be
/// valid UTF-8.
fn split_logical_lines(text: &[u8]) -> Vec<Vec<u8>> {
    let mut joined = Vec::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        if text[i] == b'\\' && text.get(i + 1) == Some(&b'\n') {
            i += 2;
            continue;
        }
        joined.push(text[i]);
        i += 1;
    }
    joined.split(|&b| b == b'\n').map(|s| s.to_vec()).collect()
}
