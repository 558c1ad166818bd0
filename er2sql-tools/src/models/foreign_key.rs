use serde::{Deserialize, Serialize};
use crate::models::index::{ErIndex, ErIndexType};

#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ErForeignKey {
    pub name: String,
    /// Recorded in the model only, not materialized as a constraint.
    pub model_only: bool,
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    pub delete_rule: String,
    pub update_rule: String,
    /// The index enforcing the constraint on the owning table.
    pub index: ErIndex,
}

impl Default for ErForeignKey {
    fn default() -> Self {
        ErForeignKey {
            name: String::new(),
            model_only: false,
            columns: vec![],
            referenced_table: String::new(),
            referenced_columns: vec![],
            delete_rule: "NO ACTION".to_string(),
            update_rule: "NO ACTION".to_string(),
            index: ErIndex::default(),
        }
    }
}

impl ErForeignKey {
    pub fn new(name: &str, columns: &[&str], referenced_table: &str, referenced_columns: &[&str]) -> Self {
        ErForeignKey {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            referenced_table: referenced_table.to_string(),
            referenced_columns: referenced_columns.iter().map(|c| c.to_string()).collect(),
            index: ErIndex::new(&format!("{}_idx", name), ErIndexType::Index, columns),
            ..Default::default()
        }
    }
}
