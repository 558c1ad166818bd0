use tracing::info;
use crate::models::ErTable;

/// Types that cannot carry a default value.
pub const NO_DEFAULT_TYPES: &[&str] = &["TEXT"];

/// Types whose empty string default is rewritten to zero.
pub const NUMERIC_TYPES: &[&str] = &["TINYINT", "SMALLINT", "MEDIUMINT", "INT", "BIGINT", "FLOAT", "DOUBLE", "DECIMAL"];

const EMPTY_STRING_DEFAULT: &str = "''";
const ZERO_DEFAULT: &str = "'0'";

/// Clears column character sets and repairs defaults that do not fit the column type.
///
/// Types are matched by prefix against the formatted type, so `DECIMAL(10,2)` counts as
/// `DECIMAL` and `INTEGER` counts as `INT`.
pub fn normalize_columns(table: &mut ErTable) {
    for column in &mut table.columns {
        column.character_set_name.clear();

        for type_name in NO_DEFAULT_TYPES {
            if column.formatted_type.starts_with(type_name) && !column.default_value.is_empty() {
                column.default_value.clear();
                info!(table = %table.name, column = %column.name, "Cleared default value of column");
            }
        }

        for type_name in NUMERIC_TYPES {
            if column.formatted_type.starts_with(type_name) && column.default_value == EMPTY_STRING_DEFAULT {
                column.default_value = ZERO_DEFAULT.to_string();
                info!(table = %table.name, column = %column.name, "Set default value of column to 0");
            }
        }
    }
}
