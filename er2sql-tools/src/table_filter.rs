use std::collections::BTreeSet;
use std::str::FromStr;
use std::convert::Infallible;

/// The tables statements are generated for.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct TableFilter {
    tables: BTreeSet<String>,
}

impl TableFilter {
    pub fn new<S: Into<String>>(tables: impl IntoIterator<Item = S>) -> Self {
        TableFilter {
            tables: tables.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma separated list of table names. Names are trimmed and empty
    /// entries are ignored.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim).filter(|t| !t.is_empty()))
    }

    pub fn includes(&self, table_name: &str) -> bool {
        self.tables.contains(table_name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.as_str())
    }
}

impl FromStr for TableFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TableFilter::parse(s))
    }
}
