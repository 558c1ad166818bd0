use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write;
use crate::models::{ErCatalog, ErColumn, ErSchema, ErTable};
use crate::render::{RenderOptions, ScriptOptions, SqlRenderer};
use crate::Result;

/// A call received by the [RecordingRenderer].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RendererCall {
    GenerateCreateStatements {
        version: String,
        options: RenderOptions,
    },
    CreateScript {
        options: ScriptOptions,
        /// `(object name, temp_sql)` for the schema and every table, in output order.
        pending: Vec<(String, String)>,
        custom_data: BTreeMap<String, String>,
    },
}

/// A renderer that records what it is asked to do instead of generating real SQL.
///
/// Generating sets every object's `temp_sql` to `create <name>`, and the script
/// contains one line per non-empty `temp_sql`.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: RefCell<Vec<RendererCall>>,
}

impl SqlRenderer for RecordingRenderer {
    fn generate_create_statements(&self, catalog: &mut ErCatalog, version: &str, options: &RenderOptions) -> Result<()> {
        self.calls.borrow_mut().push(RendererCall::GenerateCreateStatements {
            version: version.to_string(),
            options: *options,
        });

        for schema in &mut catalog.schemas {
            schema.temp_sql = format!("create {}", schema.name);
            for table in &mut schema.tables {
                table.temp_sql = format!("create {}", table.name);
            }
        }

        Ok(())
    }

    fn create_script_for_catalog_objects<W: Write>(&self, sink: &mut W, catalog: &ErCatalog, options: &ScriptOptions) -> Result<()> {
        let pending = catalog.schemas.iter()
            .flat_map(|schema| {
                std::iter::once((schema.name.clone(), schema.temp_sql.clone()))
                    .chain(schema.tables.iter().map(|t| (t.name.clone(), t.temp_sql.clone())))
            })
            .collect::<Vec<_>>();

        for (_, sql) in pending.iter().filter(|(_, sql)| !sql.is_empty()) {
            writeln!(sink, "{}", sql)?;
        }

        self.calls.borrow_mut().push(RendererCall::CreateScript {
            options: options.clone(),
            pending,
            custom_data: catalog.custom_data.clone(),
        });

        Ok(())
    }
}

/// A catalog with schema `x` holding `t1 (c1 TEXT default 'abc')` and
/// `t2 (c2 INT default '')`.
pub fn two_table_catalog() -> ErCatalog {
    let mut t1 = ErTable::new("t1");
    t1.columns.push(ErColumn::new("c1", "TEXT").with_default("'abc'"));

    let mut t2 = ErTable::new("t2");
    t2.columns.push(ErColumn::new("c2", "INT").with_default("''"));

    let mut schema = ErSchema::new("x");
    schema.tables.push(t1);
    schema.tables.push(t2);

    ErCatalog {
        schemas: vec![schema],
        ..Default::default()
    }
}
