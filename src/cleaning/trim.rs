// Whitespace trimming

use crate::data::{Table, Value};

/// Strip leading and trailing whitespace from every string cell, Unicode
/// whitespace included. Non-string values pass through unchanged. Returns
/// the new table and the number of cells whose value actually changed.
pub fn trim_whitespace(table: &Table) -> (Table, usize) {
    let mut trimmed_count = 0;

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut new_row = row.clone();
            for (_, value) in new_row.values.iter_mut() {
                if let Value::String(s) = value {
                    // trim only ever shortens, so a length change is the
                    // same as a value change
                    let trimmed = s.trim();
                    if trimmed.len() != s.len() {
                        let replacement = trimmed.to_string();
                        *value = Value::String(replacement);
                        trimmed_count += 1;
                    }
                }
            }
            new_row
        })
        .collect();

    (Table::from_rows(rows), trimmed_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    #[test]
    fn trims_and_counts_only_changed_cells() {
        let table = Table::from_rows(vec![Row::from_pairs(vec![
            ("a", Value::String("  padded  ".to_string())),
            ("b", Value::String("clean".to_string())),
            ("c", Value::Integer(7)),
            ("d", Value::Null),
        ])]);

        let (result, count) = trim_whitespace(&table);

        assert_eq!(count, 1);
        let row = &result.rows[0];
        assert_eq!(row.get("a"), Some(&Value::String("padded".to_string())));
        assert_eq!(row.get("b"), Some(&Value::String("clean".to_string())));
        assert_eq!(row.get("c"), Some(&Value::Integer(7)));
    }

    #[test]
    fn handles_unicode_whitespace() {
        let table = Table::from_rows(vec![Row::from_pairs(vec![(
            "a",
            Value::String("\u{a0}\u{2003}text\u{2009}".to_string()),
        )])]);

        let (result, count) = trim_whitespace(&table);

        assert_eq!(count, 1);
        assert_eq!(
            result.rows[0].get("a"),
            Some(&Value::String("text".to_string()))
        );
    }

    #[test]
    fn idempotent_on_trimmed_table() {
        let table = Table::from_rows(vec![Row::from_pairs(vec![(
            "a",
            Value::String("  x".to_string()),
        )])]);

        let (once, count) = trim_whitespace(&table);
        assert_eq!(count, 1);

        let (twice, count_again) = trim_whitespace(&once);
        assert_eq!(count_again, 0);
        assert_eq!(once, twice);
    }
}
