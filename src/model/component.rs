//! Path components and binding types (spec.md §3).

/// One element of an entry's dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// An identifier drawn from `[A-Za-z0-9_-]`.
    Normal(String),
    /// The `?` form: matches exactly one query path element.
    Wildcard,
}

impl Component {
    pub fn is_normal(&self) -> bool {
        matches!(self, Component::Normal(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Component::Normal(name) => Some(name),
            Component::Wildcard => None,
        }
    }
}

/// The connection between a component and the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// The `.` binding: the next query path element must align here.
    Tight,
    /// The `*` binding: zero or more query path elements may be skipped.
    Loose,
}

/// Returns `true` if `byte` is a legal character inside a `Normal`
/// component name.
#[inline]
pub fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}
