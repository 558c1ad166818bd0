use serde::{Deserialize, Serialize};

#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErIndex {
    pub name: String,
    pub index_type: ErIndexType,
    pub columns: Vec<ErIndexColumn>,
    pub comment: String,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub enum ErIndexType {
    Primary,
    Unique,
    #[default]
    Index,
    Fulltext,
}

#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErIndexColumn {
    pub name: String,
    pub descending: bool,
}

impl ErIndex {
    pub fn new(name: &str, index_type: ErIndexType, columns: &[&str]) -> Self {
        ErIndex {
            name: name.to_string(),
            index_type,
            columns: columns.iter().map(|c| ErIndexColumn {
                name: c.to_string(),
                descending: false,
            }).collect(),
            comment: String::new(),
        }
    }
}
