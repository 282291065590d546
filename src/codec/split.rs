//! Splitting a row of text into fields

use super::QUOTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// Split a row string into fields.
///
/// A field starting with `"` is quoted: separators and whitespace inside it are
/// kept, `""` stands for one literal quote and the enclosing quotes are dropped.
/// A quote anywhere else is an ordinary character. An unterminated quoted field
/// runs to the end of the row. Always returns at least one field.
pub fn split_row(row: &str, separator: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = State::Unquoted;
    let mut at_field_start = true;
    let mut rest = row;

    while let Some(c) = rest.chars().next() {
        match state {
            State::Unquoted => {
                if !separator.is_empty() && rest.starts_with(separator) {
                    fields.push(std::mem::take(&mut field));
                    rest = &rest[separator.len()..];
                    at_field_start = true;
                    continue;
                }
                if c == QUOTE && at_field_start {
                    state = State::Quoted;
                } else {
                    field.push(c);
                }
            }
            State::Quoted => {
                if c == QUOTE {
                    if rest[1..].starts_with(QUOTE) {
                        field.push(QUOTE);
                        rest = &rest[2..];
                        continue;
                    }
                    state = State::Unquoted;
                } else {
                    field.push(c);
                }
            }
        }
        at_field_start = false;
        rest = &rest[c.len_utf8()..];
    }

    fields.push(field);
    fields
}
