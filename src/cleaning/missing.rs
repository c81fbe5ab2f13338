// Missing-value handling

use crate::data::{Table, Value};

use super::{MissingValueConfig, MissingValueStrategy, MISSING_MARKER};

/// Apply the configured missing-value strategy.
///
/// A cell is missing when it is null or an empty string; a whitespace-only
/// string is not missing unless a prior trim stage emptied it.
///
/// The returned count is strategy-dependent: rows dropped for `Remove`,
/// cells replaced for `Flag` and `Fill`.
pub fn handle_missing_values(table: &Table, config: &MissingValueConfig) -> (Table, usize) {
    let mut affected = 0;

    match config.strategy {
        MissingValueStrategy::Remove => {
            let rows = table
                .rows
                .iter()
                .filter(|row| {
                    let has_missing = row.values.values().any(Value::is_missing);
                    if has_missing {
                        affected += 1;
                    }
                    !has_missing
                })
                .cloned()
                .collect();

            (Table::from_rows(rows), affected)
        }
        MissingValueStrategy::Flag | MissingValueStrategy::Fill => {
            let replacement = match config.strategy {
                MissingValueStrategy::Flag => MISSING_MARKER,
                _ => config.fill_value.as_str(),
            };

            let rows = table
                .rows
                .iter()
                .map(|row| {
                    let mut new_row = row.clone();
                    for (_, value) in new_row.values.iter_mut() {
                        if value.is_missing() {
                            *value = Value::String(replacement.to_string());
                            affected += 1;
                        }
                    }
                    new_row
                })
                .collect();

            (Table::from_rows(rows), affected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    fn config(strategy: MissingValueStrategy, fill_value: &str) -> MissingValueConfig {
        MissingValueConfig {
            strategy,
            fill_value: fill_value.to_string(),
        }
    }

    #[test]
    fn flag_replaces_cells() {
        let table = Table::from_rows(vec![Row::from_pairs(vec![
            ("email", Value::String(String::new())),
            ("phone", Value::Null),
            ("name", Value::String("Ada".to_string())),
        ])]);

        let (result, affected) =
            handle_missing_values(&table, &config(MissingValueStrategy::Flag, ""));

        assert_eq!(affected, 2);
        let row = &result.rows[0];
        assert_eq!(row.get("email"), Some(&Value::String("[MISSING]".to_string())));
        assert_eq!(row.get("phone"), Some(&Value::String("[MISSING]".to_string())));
        assert_eq!(row.get("name"), Some(&Value::String("Ada".to_string())));
    }

    #[test]
    fn fill_uses_configured_value() {
        let table = Table::from_rows(vec![Row::from_pairs(vec![(
            "email",
            Value::String(String::new()),
        )])]);

        let (result, affected) =
            handle_missing_values(&table, &config(MissingValueStrategy::Fill, "N/A"));

        assert_eq!(affected, 1);
        assert_eq!(
            result.rows[0].get("email"),
            Some(&Value::String("N/A".to_string()))
        );
    }

    #[test]
    fn remove_drops_rows_and_counts_rows() {
        let table = Table::from_rows(vec![
            Row::from_pairs(vec![
                ("email", Value::String(String::new())),
                ("name", Value::String("Ada".to_string())),
            ]),
            Row::from_pairs(vec![
                ("email", Value::String("a@b.c".to_string())),
                ("name", Value::String("Grace".to_string())),
            ]),
        ]);

        let (result, affected) =
            handle_missing_values(&table, &config(MissingValueStrategy::Remove, ""));

        // one row dropped, counted in rows not cells
        assert_eq!(affected, 1);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.rows[0].get("name"),
            Some(&Value::String("Grace".to_string()))
        );
    }

    #[test]
    fn whitespace_only_is_not_missing() {
        let table = Table::from_rows(vec![Row::from_pairs(vec![(
            "note",
            Value::String("   ".to_string()),
        )])]);

        let (result, affected) =
            handle_missing_values(&table, &config(MissingValueStrategy::Remove, ""));

        assert_eq!(affected, 0);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn clean_table_passes_through() {
        let table = Table::from_rows(vec![Row::from_pairs(vec![(
            "x",
            Value::Integer(1),
        )])]);

        let (result, affected) =
            handle_missing_values(&table, &config(MissingValueStrategy::Flag, ""));

        assert_eq!(affected, 0);
        assert_eq!(result, table);
    }
}
