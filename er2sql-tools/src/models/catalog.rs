use std::collections::BTreeMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use crate::models::column::ErColumn;
use crate::models::datatype::DatatypeRegistry;
use crate::models::schema::ErSchema;
use crate::models::table::NewColumn;
use crate::{Er2SqlError, Result};

pub const PREAMBLE_KEY: &str = "migration:preamble";
pub const POSTAMBLE_KEY: &str = "migration:postamble";

/// The root of a model: its schemas and the datatypes columns can use.
#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ErCatalog {
    /// The server version statements are generated for.
    pub version: String,
    pub schemas: Vec<ErSchema>,
    pub simple_datatypes: DatatypeRegistry,
    /// Free-form text fields read by the renderer, eg [PREAMBLE_KEY].
    pub custom_data: BTreeMap<String, String>,
}

impl Default for ErCatalog {
    fn default() -> Self {
        ErCatalog {
            version: "8.0.26".to_string(),
            schemas: vec![],
            simple_datatypes: DatatypeRegistry::mysql(),
            custom_data: BTreeMap::new(),
        }
    }
}

impl ErCatalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// The schema that gets processed. Only the first schema of a catalog is considered.
    pub fn first_schema(&self) -> Result<&ErSchema> {
        self.schemas.first().ok_or(Er2SqlError::NoSchema)
    }

    pub fn first_schema_mut(&mut self) -> Result<&mut ErSchema> {
        self.schemas.first_mut().ok_or(Er2SqlError::NoSchema)
    }

    /// Adds a column to a table of the first schema. See [crate::ErTable::add_column].
    pub fn add_column(&mut self, table_name: &str, new_column: NewColumn<'_>) -> Result<&ErColumn> {
        let ErCatalog { schemas, simple_datatypes, .. } = self;

        let table = schemas.first_mut()
            .ok_or(Er2SqlError::NoSchema)?
            .get_table_mut(table_name)
            .ok_or_else(|| Er2SqlError::UnknownTable(table_name.to_string()))?;

        table.add_column(simple_datatypes, new_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use crate::{ErTable, ErForeignKey};

    #[test]
    fn loads_model_with_defaults_for_missing_fields() {
        let catalog = ErCatalog::from_json_str(indoc! {r#"
            {
                "schemas": [
                    {
                        "name": "shop",
                        "tables": [
                            {
                                "name": "orders",
                                "table_engine": "InnoDB",
                                "columns": [
                                    { "name": "id", "formatted_type": "INT", "is_not_null": true },
                                    { "name": "customer_id", "formatted_type": "INT" }
                                ],
                                "foreign_keys": [
                                    {
                                        "name": "orders_customer",
                                        "model_only": true,
                                        "columns": ["customer_id"],
                                        "referenced_table": "customers",
                                        "referenced_columns": ["id"]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        "#}).unwrap();

        assert_eq!(catalog.version, "8.0.26");
        assert!(catalog.simple_datatypes.lookup("VARCHAR").is_some());

        let schema = catalog.first_schema().unwrap();
        assert_eq!(schema.name, "shop");

        let table = schema.get_table("orders").unwrap();
        assert_eq!(table.table_engine, "InnoDB");
        assert_eq!(table.columns.len(), 2);
        assert!(table.columns[0].is_not_null);
        assert_eq!(table.columns[1].default_value, "");

        let foreign_key = &table.foreign_keys[0];
        assert!(foreign_key.model_only);
        assert_eq!(foreign_key.delete_rule, "NO ACTION");
        assert_eq!(foreign_key.referenced_table, "customers");
    }

    #[test]
    fn rejects_invalid_model() {
        let result = ErCatalog::from_json_str(r#"{ "schemas": 5 }"#);
        assert!(matches!(result, Err(Er2SqlError::ModelParseError(_))));
    }

    #[test]
    fn loads_model_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let mut catalog = ErCatalog::default();
        let mut schema = ErSchema::new("shop");
        let mut table = ErTable::new("orders");
        table.foreign_keys.push(ErForeignKey::new("orders_customer", &["customer_id"], "customers", &["id"]));
        schema.tables.push(table);
        catalog.schemas.push(schema);

        std::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        assert_eq!(ErCatalog::load_json_file(&path).unwrap(), catalog);
    }

    #[test]
    fn missing_model_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ErCatalog::load_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Er2SqlError::IoError(_))));
    }

    #[test]
    fn adds_column_to_table_in_first_schema() {
        let mut catalog = ErCatalog::default();
        let mut schema = ErSchema::new("shop");
        schema.tables.push(ErTable::new("orders"));
        catalog.schemas.push(schema);

        let column = catalog.add_column("orders", NewColumn::new("total", "decimal(10,2)")).unwrap();
        assert_eq!(column.formatted_type, "DECIMAL(10,2)");

        let result = catalog.add_column("missing", NewColumn::new("total", "int"));
        assert!(matches!(result, Err(Er2SqlError::UnknownTable(name)) if name == "missing"));
    }

    #[test]
    fn catalog_without_schemas() {
        let mut catalog = ErCatalog::default();
        assert!(matches!(catalog.first_schema(), Err(Er2SqlError::NoSchema)));
        assert!(matches!(catalog.add_column("orders", NewColumn::new("id", "int")), Err(Er2SqlError::NoSchema)));
    }
}
