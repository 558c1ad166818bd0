use crate::quoting::{quote_value_string, Quotable};
use itertools::Itertools;

#[derive(Debug, Default)]
pub struct DdlQueryBuilder {
    sql: String,
    table_options: Vec<String>,
}

impl DdlQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a `CREATE TABLE IF NOT EXISTS`. The name is expected to be quoted already.
    pub fn create_table(&mut self, quoted_table_name: &str) -> DdlTableBuilder<'_> {
        self.sql.push_str(&format!("CREATE TABLE IF NOT EXISTS {} (", quoted_table_name));

        DdlTableBuilder {
            query_builder: self,
            has_first_line: false,
        }
    }

    pub fn build(mut self) -> String {
        self.sql.push_str("\n)");

        for option in &self.table_options {
            self.sql.push('\n');
            self.sql.push_str(option);
        }

        self.sql.push(';');

        self.sql
    }
}

pub struct DdlTableBuilder<'b> {
    query_builder: &'b mut DdlQueryBuilder,
    has_first_line: bool,
}

impl DdlTableBuilder<'_> {
    pub fn column<'c>(&'c mut self, name: &str, data_type: &str) -> DdlTableColumnBuilder<'c> {
        self.start_new_line();
        self.query_builder
            .sql
            .push_str(&format!("  {} {}", name.quote(), data_type));

        DdlTableColumnBuilder {
            sql: &mut self.query_builder.sql,
        }
    }

    pub fn primary_key<S: AsRef<str>>(&mut self, columns: impl IntoIterator<Item = S>) -> &mut Self {
        self.start_new_line();
        let cols = columns.into_iter().map(|c| c.quote()).join(", ");
        self.query_builder.sql.push_str(&format!("  PRIMARY KEY ({})", cols));

        self
    }

    /// Adds an index. `keyword` is the index kind, eg `INDEX` or `UNIQUE INDEX`, and
    /// columns are given with whether they are sorted descending.
    pub fn index<S: AsRef<str>>(&mut self, keyword: &str, name: &str, columns: impl IntoIterator<Item = (S, bool)>) -> DdlIndexBuilder<'_> {
        self.start_new_line();
        let cols = columns
            .into_iter()
            .map(|(c, descending)| format!("{} {}", c.quote(), if descending { "DESC" } else { "ASC" }))
            .join(", ");
        self.query_builder.sql.push_str(&format!("  {} {} ({})", keyword, name.quote(), cols));

        DdlIndexBuilder {
            sql: &mut self.query_builder.sql,
        }
    }

    pub fn foreign_key<S: AsRef<str>, R: AsRef<str>>(
        &mut self,
        name: &str,
        columns: impl IntoIterator<Item = S>,
        quoted_referenced_table: &str,
        referenced_columns: impl IntoIterator<Item = R>,
    ) -> DdlForeignKeyBuilder<'_> {
        self.start_new_line();
        let cols = columns.into_iter().map(|c| c.quote()).join(", ");
        let referenced_cols = referenced_columns.into_iter().map(|c| c.quote()).join(", ");
        self.query_builder.sql.push_str(&format!(
            "  CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
            name.quote(),
            cols,
            quoted_referenced_table,
            referenced_cols
        ));

        DdlForeignKeyBuilder {
            sql: &mut self.query_builder.sql,
        }
    }

    /// Adds a table option such as `ENGINE = InnoDB` after the closing parenthesis.
    pub fn table_option(&mut self, name: &str, value: &str) -> &mut Self {
        self.query_builder.table_options.push(format!("{} = {}", name, value));

        self
    }

    pub fn comment(&mut self, comment: &str) -> &mut Self {
        self.query_builder.table_options.push(format!("COMMENT = {}", quote_value_string(comment)));

        self
    }

    fn start_new_line(&mut self) {
        if self.has_first_line {
            self.query_builder.sql.push_str(",\n")
        } else {
            self.query_builder.sql.push('\n');
            self.has_first_line = true;
        }
    }
}

pub struct DdlTableColumnBuilder<'a> {
    sql: &'a mut String,
}

impl DdlTableColumnBuilder<'_> {
    pub fn character_set(&mut self, character_set: &str) -> &mut Self {
        self.sql.push_str(" CHARACTER SET ");
        self.sql.push_str(character_set);

        self
    }

    pub fn not_null(&mut self) -> &mut Self {
        self.sql.push_str(" NOT NULL");

        self
    }

    pub fn null(&mut self) -> &mut Self {
        self.sql.push_str(" NULL");

        self
    }

    /// Adds a default. The value is a raw SQL expression or literal.
    pub fn default_value(&mut self, value: &str) -> &mut Self {
        self.sql.push_str(" DEFAULT ");
        self.sql.push_str(value);

        self
    }

    pub fn auto_increment(&mut self) -> &mut Self {
        self.sql.push_str(" AUTO_INCREMENT");

        self
    }

    pub fn comment(&mut self, comment: &str) -> &mut Self {
        self.sql.push_str(" COMMENT ");
        self.sql.push_str(&quote_value_string(comment));

        self
    }
}

pub struct DdlIndexBuilder<'a> {
    sql: &'a mut String,
}

impl DdlIndexBuilder<'_> {
    pub fn comment(&mut self, comment: &str) -> &mut Self {
        self.sql.push_str(" COMMENT ");
        self.sql.push_str(&quote_value_string(comment));

        self
    }

    /// Marks the index as visible to the optimizer. Requires MySQL 8.
    pub fn visible(&mut self) -> &mut Self {
        self.sql.push_str(" VISIBLE");

        self
    }
}

pub struct DdlForeignKeyBuilder<'a> {
    sql: &'a mut String,
}

impl DdlForeignKeyBuilder<'_> {
    pub fn on_delete(&mut self, rule: &str) -> &mut Self {
        self.sql.push_str(" ON DELETE ");
        self.sql.push_str(rule);

        self
    }

    pub fn on_update(&mut self, rule: &str) -> &mut Self {
        self.sql.push_str(" ON UPDATE ");
        self.sql.push_str(rule);

        self
    }
}
