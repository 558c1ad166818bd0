use crate::models::ErTable;

/// Clears the table level overrides so the server defaults apply, and drops any
/// pending statement.
pub fn normalize_table(table: &mut ErTable) {
    table.temp_sql.clear();
    table.table_engine.clear();
    table.default_character_set_name.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_overrides() {
        let mut table = ErTable::new("t1");
        table.table_engine = "MyISAM".to_string();
        table.default_character_set_name = "latin1".to_string();
        table.temp_sql = "-- pending".to_string();
        table.comment = "kept".to_string();

        normalize_table(&mut table);

        assert_eq!(table, ErTable {
            comment: "kept".to_string(),
            ..ErTable::new("t1")
        });

        let once = table.clone();
        normalize_table(&mut table);
        assert_eq!(table, once);
    }
}
