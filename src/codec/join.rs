//! Joining fields into a row of text

use super::QUOTE;

/// Join fields into a single row string.
///
/// Without `quote_all` fields are written verbatim: a field containing the
/// separator or a quote is not escaped and will not split back the same way.
/// With `quote_all` every field is wrapped in quotes and inner quotes are
/// doubled, so [`split_row`](super::split_row) returns the original fields.
pub fn join_row<S: AsRef<str>>(fields: &[S], separator: &str, quote_all: bool) -> String {
    let mut row = String::new();

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            row.push_str(separator);
        }

        let field = field.as_ref();
        if quote_all {
            row.push(QUOTE);
            for c in field.chars() {
                if c == QUOTE {
                    row.push(QUOTE);
                }
                row.push(c);
            }
            row.push(QUOTE);
        } else {
            row.push_str(field);
        }
    }

    row
}
