//! Row codec: splitting delimited text into fields and joining fields back

mod join;
mod split;

pub use join::join_row;
pub use split::split_row;

/// Quote character used for quoted fields
pub const QUOTE: char = '"';

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unquoted_round_trip() {
        let original = fields(&["id", "name", "score", ""]);
        let text = join_row(&original, ",", false);
        assert_eq!(text, "id,name,score,");
        assert_eq!(split_row(&text, ","), original);
    }

    #[test]
    fn test_quoted_round_trip_with_special_characters() {
        let samples = vec![
            fields(&["a", "\"hi\"", "b"]),
            fields(&["a,b", "c;d", "\"", "\"\"", ""]),
            fields(&["trailing quote\"", "\"leading", " padded "]),
            fields(&[""]),
            fields(&["héllo", "wörld, ünïcode"]),
        ];

        for separator in [",", ";", "\t", "::"] {
            for original in &samples {
                let text = join_row(original, separator, true);
                assert_eq!(
                    &split_row(&text, separator),
                    original,
                    "separator {:?}, text {:?}",
                    separator,
                    text
                );
            }
        }
    }

    #[test]
    fn test_unquoted_join_is_not_reversible_for_separators() {
        let original = fields(&["a,b", "c"]);
        let text = join_row(&original, ",", false);
        assert_eq!(text, "a,b,c");
        assert_eq!(split_row(&text, ","), fields(&["a", "b", "c"]));
    }
}
