use serde::{Deserialize, Serialize};
use crate::models::table::ErTable;

#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErSchema {
    pub name: String,
    pub default_character_set_name: String,
    pub default_collation_name: String,
    pub tables: Vec<ErTable>,
    /// SQL produced for the schema by the last render, or a skip marker.
    pub temp_sql: String,
}

impl ErSchema {
    pub fn new(name: &str) -> Self {
        ErSchema {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn get_table(&self, name: &str) -> Option<&ErTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut ErTable> {
        self.tables.iter_mut().find(|t| t.name == name)
    }
}
