use std::io::Write;
use tracing::{debug, instrument};
use crate::models::{ErCatalog, POSTAMBLE_KEY, PREAMBLE_KEY};
use crate::render::{RenderOptions, ScriptOptions, SqlRenderer};
use crate::table_filter::TableFilter;
use crate::Result;

/// Replaces the statements of an object that is left out of the script.
pub fn skip_marker(name: &str) -> String {
    format!("-- generated skip, no script was generated for {}", name)
}

/// Which tables got statements in a generated script.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct ScriptSummary {
    pub included: Vec<String>,
    pub skipped: Vec<String>,
}

/// Generates the create script for the first schema of the catalog and writes it to the sink.
///
/// The schema statement is always replaced by a skip marker, and so is every table the
/// filter does not include. Without a filter all tables are included. Any later schema is
/// skipped along with all of its tables. The preamble and postamble of the catalog are cleared.
#[instrument(skip_all)]
pub fn generate_sql<R: SqlRenderer, W: Write>(
    catalog: &mut ErCatalog,
    tables: Option<&TableFilter>,
    sink: &mut W,
    renderer: &R,
) -> Result<ScriptSummary> {
    let version = catalog.version.clone();
    renderer.generate_create_statements(catalog, &version, &RenderOptions::for_script_generation())?;

    let schema = catalog.first_schema_mut()?;
    schema.temp_sql = skip_marker(&schema.name);

    let mut summary = ScriptSummary::default();
    for table in &mut schema.tables {
        match tables {
            Some(filter) if !filter.includes(&table.name) => {
                debug!(table = %table.name, "Skipping table");
                table.temp_sql = skip_marker(&table.name);
                summary.skipped.push(table.name.clone());
            }
            _ => summary.included.push(table.name.clone()),
        }
    }

    for schema in catalog.schemas.iter_mut().skip(1) {
        debug!(schema = %schema.name, "Skipping schema");
        schema.temp_sql = skip_marker(&schema.name);
        for table in &mut schema.tables {
            table.temp_sql = skip_marker(&table.name);
        }
    }

    catalog.custom_data.insert(PREAMBLE_KEY.to_string(), String::new());
    catalog.custom_data.insert(POSTAMBLE_KEY.to_string(), String::new());

    renderer.create_script_for_catalog_objects(sink, catalog, &ScriptOptions::default())?;

    Ok(summary)
}
