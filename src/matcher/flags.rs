//! Per-position match flags (spec.md §4.4.1).

/// Matched the query name at this position.
pub const NAME: u8 = 1 << 0;
/// Matched the query class at this position.
pub const CLASS: u8 = 1 << 1;
/// Matched via a `?` component at this position.
pub const WILDCARD: u8 = 1 << 2;
/// The database component that led here was skipped via loose binding.
pub const SKIPPED: u8 = 1 << 3;
/// The component consumed at this position was reached through a
/// loose-bound database component.
pub const PRECEDING_LOOSE: u8 = 1 << 4;
