use crate::models::ErTable;

/// Materializes every foreign key of the table and names it, and its index, after
/// the tables it connects: `fk_<table>_<referenced table>` and `..._idx`.
///
/// Two keys to the same table end up with the same name.
pub fn normalize_foreign_keys(table: &mut ErTable) {
    for foreign_key in &mut table.foreign_keys {
        foreign_key.model_only = false;
        foreign_key.name = format!("fk_{}_{}", table.name, foreign_key.referenced_table);
        foreign_key.index.name = format!("{}_idx", foreign_key.name);
    }
}
