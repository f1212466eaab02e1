//! Entry representation, specifier-equality, and canonical rendering
//! (spec.md §3, §4.2).

use super::component::{Binding, Component};

/// A single parsed resource entry: an ordered, non-empty component
/// sequence plus an optional value.
///
/// Invariants upheld by the parser that constructs every `Entry`:
/// - at least one component;
/// - the last component is `Normal` (no trailing wildcard);
/// - `value` is `Some` iff the entry was parsed in full-entry mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    components: Vec<(Binding, Component)>,
    value: Option<Vec<u8>>,
}

impl Entry {
    /// Construct an entry from an already-validated component sequence.
    /// Only the parser should call this; it does not re-check the
    /// invariants above.
    pub(crate) fn new(components: Vec<(Binding, Component)>, value: Option<Vec<u8>>) -> Self {
        debug_assert!(!components.is_empty());
        debug_assert!(components.last().unwrap().1.is_normal());
        Entry { components, value }
    }

    pub fn components(&self) -> &[(Binding, Component)] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn value_str(&self) -> Option<&str> {
        self.value.as_deref().and_then(|v| std::str::from_utf8(v).ok())
    }

    /// `true` iff this is a full entry (carries a value), as opposed to
    /// a query-only entry produced for matching.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Specifier-equality (spec.md §3): same length, per-position type,
    /// per-position binding, and (for `Normal` positions) identical
    /// names. Values never participate.
    pub fn specifier_eq(&self, other: &Entry) -> bool {
        if self.components.len() != other.components.len() {
            return false;
        }
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|((ba, ca), (bb, cb))| ba == bb && ca == cb)
    }

    /// Render this entry back to its canonical textual form (spec.md
    /// §4.2), as raw bytes. Only meaningful for full entries; query-only
    /// entries (`value() == None`) render just their component path,
    /// with no trailing `": "` + value — callers never persist those
    /// to a database, so no canonical form for them is specified.
    ///
    /// Returns bytes rather than `String` because a value is an
    /// arbitrary byte string (spec.md §3: "UTF-8 not required") —
    /// component names and separators are themselves restricted to
    /// ASCII, but routing a value byte through `char` would re-encode
    /// any byte ≥ 0x80 as a different, longer UTF-8 sequence.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, (binding, component)) in self.components.iter().enumerate() {
            if i == 0 {
                if matches!(binding, Binding::Loose) {
                    out.push(b'*');
                }
            } else {
                out.push(match binding {
                    Binding::Tight => b'.',
                    Binding::Loose => b'*',
                });
            }
            match component {
                Component::Normal(name) => out.extend_from_slice(name.as_bytes()),
                Component::Wildcard => out.push(b'?'),
            }
        }
        if let Some(value) = &self.value {
            out.extend_from_slice(b": ");
            out.extend_from_slice(&escape_value(value));
        }
        out
    }
}

/// Escape a raw value for canonical rendering (spec.md §4.2): prefix a
/// backslash if the value begins with a space or tab; replace embedded
/// newlines with `\n` and embedded backslashes with `\\`; everything
/// else is emitted verbatim, byte-for-byte (values need not be valid
/// UTF-8, so this never routes a byte through `char`/`String`).
pub fn escape_value(value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() + 2);
    if matches!(value.first(), Some(b' ') | Some(b'\t')) {
        out.push(b'\\');
    }
    for &byte in value {
        match byte {
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\\' => out.extend_from_slice(b"\\\\"),
            _ => out.push(byte),
        }
    }
    out
}
