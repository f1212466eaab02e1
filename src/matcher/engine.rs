//! Backtracking single-entry match and cross-entry precedence
//! selection (spec.md §4.4.1-3).

use super::flags::{CLASS, NAME, PRECEDING_LOOSE, SKIPPED, WILDCARD};
use crate::model::{Binding, Component, Entry};

/// Attempt to match `entry`'s component path against a query `name`
/// path (and optional `class` path of the same length). Returns the
/// per-position flag vector on success.
pub fn match_entry(entry: &Entry, name: &[&str], class: Option<&[&str]>) -> Option<Vec<u8>> {
    let mut flags = vec![0u8; name.len()];
    if try_match(entry.components(), name, class, 0, 0, &mut flags) {
        Some(flags)
    } else {
        None
    }
}

/// Greedy-first, backtrack-on-failure walk over the database path.
/// Mirrors the rule order of spec.md §4.4.1 exactly: a database
/// component's binding only grants a second interpretation (skip via
/// loose) when the first (consume) interpretation fails downstream.
fn try_match(
    db: &[(Binding, Component)],
    name: &[&str],
    class: Option<&[&str]>,
    db_idx: usize,
    q_idx: usize,
    flags: &mut [u8],
) -> bool {
    let n = name.len();
    if db_idx == db.len() && q_idx == n {
        return true;
    }
    if db_idx == db.len() || q_idx == n {
        return false;
    }

    let (binding, component) = &db[db_idx];
    let loose = *binding == Binding::Loose;
    let q_name = name[q_idx];
    let q_class = class.map(|c| c[q_idx]);

    let primary = match component {
        Component::Normal(db_name) => {
            if db_name == q_name {
                Some(NAME)
            } else if q_class.is_some_and(|c| db_name == c) {
                Some(CLASS)
            } else {
                None
            }
        }
        Component::Wildcard => Some(WILDCARD),
    };

    if let Some(bits) = primary {
        flags[q_idx] = bits | if loose { PRECEDING_LOOSE } else { 0 };
        if try_match(db, name, class, db_idx + 1, q_idx + 1, flags) {
            return true;
        }
        if loose {
            flags[q_idx] = SKIPPED;
            return try_match(db, name, class, db_idx, q_idx + 1, flags);
        }
        false
    } else if loose {
        flags[q_idx] = SKIPPED;
        try_match(db, name, class, db_idx, q_idx + 1, flags)
    } else {
        false
    }
}

/// Does `candidate` beat `best` (spec.md §4.4.3)? Positions are
/// compared left to right; the first position where a listed rule
/// fires decides the outcome. If no rule ever fires, the incumbent
/// keeps its place — this function only ever reports wins for
/// `candidate`, never for `best`, by construction of the spec's rules.
pub fn candidate_wins(best: &[u8], candidate: &[u8]) -> bool {
    for (&b, &c) in best.iter().zip(candidate.iter()) {
        if b & SKIPPED != 0 && c & (NAME | CLASS | WILDCARD) != 0 {
            return true;
        }
        if b & (CLASS | WILDCARD) != 0 && c & NAME != 0 {
            return true;
        }
        if b & WILDCARD != 0 && c & CLASS != 0 {
            return true;
        }
        if b & PRECEDING_LOOSE != 0 && c & PRECEDING_LOOSE == 0 {
            return true;
        }
    }
    false
}

/// Walk the database in insertion order, matching each entry and
/// keeping the best one seen so far by [`candidate_wins`] (spec.md
/// §4.4.2).
pub fn select_best<'a>(entries: &'a [Entry], name: &[&str], class: Option<&[&str]>) -> Option<(&'a Entry, Vec<u8>)> {
    let mut best: Option<(&Entry, Vec<u8>)> = None;
    for entry in entries {
        let Some(flags) = match_entry(entry, name, class) else {
            continue;
        };
        best = match best {
            None => Some((entry, flags)),
            Some((best_entry, best_flags)) => {
                if candidate_wins(&best_flags, &flags) {
                    Some((entry, flags))
                } else {
                    Some((best_entry, best_flags))
                }
            }
        };
    }
    best
}
