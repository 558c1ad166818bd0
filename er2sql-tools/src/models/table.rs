use serde::{Deserialize, Serialize};
use tracing::instrument;
use crate::models::column::{transcode_comment, ErColumn};
use crate::models::datatype::DatatypeRegistry;
use crate::models::foreign_key::ErForeignKey;
use crate::models::index::ErIndex;
use crate::Result;

#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErTable {
    pub name: String,
    pub table_engine: String,
    pub default_character_set_name: String,
    pub comment: String,
    /// SQL produced for the table by the last render, or a skip marker.
    pub temp_sql: String,
    pub columns: Vec<ErColumn>,
    /// Indices declared on the table itself. Foreign key indices live on their key.
    pub indices: Vec<ErIndex>,
    pub foreign_keys: Vec<ErForeignKey>,
}

/// The parts of a column added through [ErTable::add_column].
#[derive(Debug, Clone)]
pub struct NewColumn<'a> {
    pub name: &'a str,
    /// A type definition such as `VARCHAR(45)`, resolved against the datatype registry.
    pub type_definition: &'a str,
    /// GBK-decoded text that is re-encoded before it is stored.
    pub comment: &'a str,
    pub is_not_null: bool,
    pub default_value: &'a str,
}

impl<'a> NewColumn<'a> {
    pub fn new(name: &'a str, type_definition: &'a str) -> Self {
        NewColumn {
            name,
            type_definition,
            comment: "",
            is_not_null: true,
            default_value: "",
        }
    }
}

impl ErTable {
    pub fn new(name: &str) -> Self {
        ErTable {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builds a column, resolves its type and appends it to the table.
    #[instrument(skip_all, fields(table = %self.name, column = %new_column.name))]
    pub fn add_column(&mut self, datatypes: &DatatypeRegistry, new_column: NewColumn<'_>) -> Result<&ErColumn> {
        let mut column = ErColumn {
            name: new_column.name.to_string(),
            comment: transcode_comment(new_column.name, new_column.comment)?,
            is_not_null: new_column.is_not_null,
            default_value: new_column.default_value.to_string(),
            ..Default::default()
        };
        column.set_parse_type(new_column.type_definition, datatypes)?;

        self.columns.push(column);
        Ok(&self.columns[self.columns.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Er2SqlError;

    #[test]
    fn adds_resolved_column() {
        let mut table = ErTable::new("users");
        table.columns.push(ErColumn::new("id", "INT"));

        let column = table.add_column(&DatatypeRegistry::mysql(), NewColumn {
            comment: "display name",
            default_value: "''",
            ..NewColumn::new("name", "varchar(45)")
        }).unwrap();

        assert_eq!(column, &ErColumn {
            name: "name".to_string(),
            formatted_type: "VARCHAR(45)".to_string(),
            simple_type: Some("VARCHAR".to_string()),
            is_not_null: true,
            default_value: "''".to_string(),
            comment: "display name".to_string(),
            ..Default::default()
        });
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[1].name, "name");
    }

    #[test]
    fn does_not_append_column_with_unknown_type() {
        let mut table = ErTable::new("users");

        let result = table.add_column(&DatatypeRegistry::mysql(), NewColumn::new("balance", "money"));

        assert!(matches!(result, Err(Er2SqlError::UnknownDatatype(_))));
        assert!(table.columns.is_empty());
    }

    #[test]
    fn does_not_append_column_with_invalid_comment() {
        let mut table = ErTable::new("users");

        let result = table.add_column(&DatatypeRegistry::mysql(), NewColumn {
            comment: "主键",
            ..NewColumn::new("id", "int")
        });

        assert!(matches!(result, Err(Er2SqlError::InvalidCommentEncoding { .. })));
        assert!(table.columns.is_empty());
    }
}
