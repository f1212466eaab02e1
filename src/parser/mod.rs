//! Entry parsing (spec.md §4.1).

mod entry_parser;

pub use entry_parser::{parse_entry, ParseMode};
