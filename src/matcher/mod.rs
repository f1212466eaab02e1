//! Query resolution: flag vectors, backtracking match, and precedence
//! selection (spec.md §4.4).

mod engine;
mod flags;
mod query;

pub use engine::{candidate_wins, match_entry, select_best};
pub use query::{get_bool, get_long, get_string};
