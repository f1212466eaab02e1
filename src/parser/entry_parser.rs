//! Character-by-character entry parser (spec.md §4.1).
//!
//! The state machine has four chunks (`Initial`, `Components`,
//! `PreValueWhitespace`, `Value`) but `Initial`/`Components` collapse
//! into a single pass here: the only thing `Initial` adds is rejecting
//! a `:` before any path material has been seen, which is tracked with
//! `seen_any` rather than a separate state.

use crate::error::ResourceError;
use crate::model::{is_name_byte, Binding, Component, Entry};

/// Which of the two entry-parsing contexts a line is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// A database line: a component path followed by `: value`.
    FullEntry,
    /// A query name/class string: a plain dotted path, no value, no
    /// wildcards or loose bindings.
    QueryOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Dot,
    Star,
}

/// Parse a single logical line into a structured [`Entry`], or fail
/// with [`ResourceError::ParseFailure`].
pub fn parse_entry(line: &[u8], mode: ParseMode) -> Result<Entry, ResourceError> {
    let mut components: Vec<(Binding, Component)> = Vec::new();
    let mut buffer: Vec<u8> = Vec::new();
    let mut pending_binding = Binding::Tight;
    let mut last_separator: Option<Separator> = None;
    let mut seen_any = false;

    let mut i = 0;
    let colon_index = loop {
        if i >= line.len() {
            break None;
        }
        match line[i] {
            b' ' | b'\t' => i += 1,
            b':' => {
                if mode == ParseMode::QueryOnly {
                    return Err(ResourceError::ParseFailure);
                }
                if !seen_any {
                    return Err(ResourceError::ParseFailure);
                }
                flush_buffer(&mut buffer, &mut components, pending_binding);
                break Some(i);
            }
            b'.' => {
                if mode == ParseMode::QueryOnly && buffer.is_empty() {
                    return Err(ResourceError::ParseFailure);
                }
                flush_buffer(&mut buffer, &mut components, pending_binding);
                pending_binding = Binding::Tight;
                last_separator = Some(Separator::Dot);
                seen_any = true;
                i += 1;
            }
            b'*' => {
                if mode == ParseMode::QueryOnly {
                    return Err(ResourceError::ParseFailure);
                }
                flush_buffer(&mut buffer, &mut components, pending_binding);
                pending_binding = Binding::Loose;
                last_separator = Some(Separator::Star);
                seen_any = true;
                i += 1;
            }
            b'?' => {
                if mode == ParseMode::QueryOnly {
                    return Err(ResourceError::ParseFailure);
                }
                flush_buffer(&mut buffer, &mut components, pending_binding);
                components.push((pending_binding, Component::Wildcard));
                pending_binding = Binding::Tight;
                last_separator = None;
                seen_any = true;
                i += 1;
            }
            b if is_name_byte(b) => {
                buffer.push(b);
                last_separator = None;
                seen_any = true;
                i += 1;
            }
            _ => return Err(ResourceError::ParseFailure),
        }
    };

    match mode {
        ParseMode::FullEntry => {
            let colon_index = colon_index.ok_or(ResourceError::ParseFailure)?;
            finish_components(&components, last_separator)?;
            let mut j = colon_index + 1;
            while matches!(line.get(j), Some(b' ') | Some(b'\t')) {
                j += 1;
            }
            let value = unescape_value(&line[j..]);
            Ok(Entry::new(components, Some(value)))
        }
        ParseMode::QueryOnly => {
            if colon_index.is_some() {
                return Err(ResourceError::ParseFailure);
            }
            flush_buffer(&mut buffer, &mut components, pending_binding);
            finish_components(&components, last_separator)?;
            Ok(Entry::new(components, None))
        }
    }
}

fn finish_components(
    components: &[(Binding, Component)],
    last_separator: Option<Separator>,
) -> Result<(), ResourceError> {
    if last_separator == Some(Separator::Star) {
        return Err(ResourceError::ParseFailure);
    }
    if components.is_empty() {
        return Err(ResourceError::ParseFailure);
    }
    if !matches!(components.last(), Some((_, Component::Normal(_)))) {
        return Err(ResourceError::ParseFailure);
    }
    Ok(())
}

fn flush_buffer(buffer: &mut Vec<u8>, components: &mut Vec<(Binding, Component)>, binding: Binding) {
    if !buffer.is_empty() {
        let bytes = std::mem::take(buffer);
        let name = String::from_utf8(bytes).expect("component bytes are restricted to ASCII");
        components.push((binding, Component::Normal(name)));
    }
}

/// Decode value escapes (spec.md §4.1 "Value semantics").
fn unescape_value(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        match bytes.get(i + 1) {
            Some(b' ') => {
                out.push(b' ');
                i += 2;
            }
            Some(b'\t') => {
                out.push(b'\t');
                i += 2;
            }
            Some(b'\\') => {
                out.push(b'\\');
                i += 2;
            }
            Some(b'n') => {
                out.push(b'\n');
                i += 2;
            }
            Some(&d1) if is_octal_digit(d1) => {
                let rest = (bytes.get(i + 2), bytes.get(i + 3));
                if let (Some(&d2), Some(&d3)) = rest {
                    if is_octal_digit(d2) && is_octal_digit(d3) {
                        out.push((d1 - b'0') * 64 + (d2 - b'0') * 8 + (d3 - b'0'));
                        i += 4;
                        continue;
                    }
                }
                out.push(b'\\');
                out.push(d1);
                i += 2;
            }
            Some(&other) => {
                out.push(b'\\');
                out.push(other);
                i += 2;
            }
            None => {
                out.push(b'\\');
                i += 1;
            }
        }
    }
    out
}

#[inline]
fn is_octal_digit(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}
