use std::io::Write;
use crate::models::ErCatalog;
use crate::Result;

mod mysql;

pub use mysql::MySqlRenderer;

/// Options that control which statements are generated for a catalog.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct RenderOptions {
    /// Leave the schema name out of qualified table names.
    pub omit_schemas: bool,
    /// Generate `CREATE SCHEMA` statements.
    pub keep_schemata: bool,
    /// Do not emit foreign key constraints as part of the table statement.
    pub skip_foreign_keys: bool,
    /// Do not emit the indices backing foreign keys.
    pub skip_fk_indexes: bool,
    /// Precede every `CREATE TABLE` with a `DROP TABLE IF EXISTS`.
    pub generate_drops: bool,
    /// Precede every `CREATE SCHEMA` with a `DROP SCHEMA IF EXISTS`.
    pub generate_schema_drops: bool,
}

impl RenderOptions {
    /// The options used when generating the create script.
    pub fn for_script_generation() -> Self {
        RenderOptions {
            omit_schemas: true,
            keep_schemata: true,
            skip_foreign_keys: true,
            skip_fk_indexes: false,
            generate_drops: false,
            generate_schema_drops: false,
        }
    }
}

/// Options that control how pending statements are written out.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScriptOptions {
    /// Written between two statements.
    pub statement_separator: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            statement_separator: "\n\n".to_string(),
        }
    }
}

/// Turns a catalog into SQL.
///
/// Rendering happens in two steps: first every schema and table gets its statements
/// stored in `temp_sql`, then those pending statements are written to a sink. Callers
/// may replace any `temp_sql` in between.
pub trait SqlRenderer {
    /// Stores the generated statements of every schema and table in its `temp_sql`.
    fn generate_create_statements(&self, catalog: &mut ErCatalog, version: &str, options: &RenderOptions) -> Result<()>;

    /// Writes the pending `temp_sql` of every catalog object to the sink, wrapped in
    /// the catalog preamble and postamble.
    fn create_script_for_catalog_objects<W: Write>(&self, sink: &mut W, catalog: &ErCatalog, options: &ScriptOptions) -> Result<()>;
}
