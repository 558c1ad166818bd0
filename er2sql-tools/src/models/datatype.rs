use serde::{Deserialize, Serialize};

/// A built-in datatype a column can be declared with.
#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleDatatype {
    /// The canonical, upper case name.
    pub name: String,
    /// Other names that resolve to this datatype, eg `INTEGER` for `INT`.
    pub synonyms: Vec<String>,
}

impl SimpleDatatype {
    pub fn new(name: &str, synonyms: &[&str]) -> Self {
        SimpleDatatype {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn is_called(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.synonyms.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

/// The datatypes known to a catalog.
#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatatypeRegistry(Vec<SimpleDatatype>);

impl DatatypeRegistry {
    /// The datatypes built into MySQL.
    pub fn mysql() -> Self {
        DatatypeRegistry(vec![
            SimpleDatatype::new("TINYINT", &["BOOL", "BOOLEAN"]),
            SimpleDatatype::new("SMALLINT", &[]),
            SimpleDatatype::new("MEDIUMINT", &[]),
            SimpleDatatype::new("INT", &["INTEGER"]),
            SimpleDatatype::new("BIGINT", &[]),
            SimpleDatatype::new("FLOAT", &[]),
            SimpleDatatype::new("DOUBLE", &["DOUBLE PRECISION", "REAL"]),
            SimpleDatatype::new("DECIMAL", &["DEC", "NUMERIC", "FIXED"]),
            SimpleDatatype::new("BIT", &[]),
            SimpleDatatype::new("DATE", &[]),
            SimpleDatatype::new("DATETIME", &[]),
            SimpleDatatype::new("TIMESTAMP", &[]),
            SimpleDatatype::new("TIME", &[]),
            SimpleDatatype::new("YEAR", &[]),
            SimpleDatatype::new("CHAR", &["CHARACTER"]),
            SimpleDatatype::new("VARCHAR", &["CHARACTER VARYING"]),
            SimpleDatatype::new("BINARY", &[]),
            SimpleDatatype::new("VARBINARY", &[]),
            SimpleDatatype::new("TINYTEXT", &[]),
            SimpleDatatype::new("TEXT", &[]),
            SimpleDatatype::new("MEDIUMTEXT", &[]),
            SimpleDatatype::new("LONGTEXT", &[]),
            SimpleDatatype::new("TINYBLOB", &[]),
            SimpleDatatype::new("BLOB", &[]),
            SimpleDatatype::new("MEDIUMBLOB", &[]),
            SimpleDatatype::new("LONGBLOB", &[]),
            SimpleDatatype::new("ENUM", &[]),
            SimpleDatatype::new("SET", &[]),
            SimpleDatatype::new("JSON", &[]),
            SimpleDatatype::new("GEOMETRY", &[]),
            SimpleDatatype::new("POINT", &[]),
        ])
    }

    /// Finds a datatype by name or synonym, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&SimpleDatatype> {
        self.0.iter().find(|d| d.is_called(name))
    }
}

impl Default for DatatypeRegistry {
    fn default() -> Self {
        DatatypeRegistry::mysql()
    }
}
