use std::io::Write;
use itertools::Itertools;
use tracing::instrument;
use crate::ddl_query_builder::DdlQueryBuilder;
use crate::models::{ErCatalog, ErIndexType, ErSchema, ErTable, POSTAMBLE_KEY, PREAMBLE_KEY};
use crate::quoting::{quote_qualified, Quotable};
use crate::render::{RenderOptions, ScriptOptions, SqlRenderer};
use crate::Result;

static DEFAULT_PREAMBLE: &str = "SET @OLD_UNIQUE_CHECKS=@@UNIQUE_CHECKS, UNIQUE_CHECKS=0;
SET @OLD_FOREIGN_KEY_CHECKS=@@FOREIGN_KEY_CHECKS, FOREIGN_KEY_CHECKS=0;
SET @OLD_SQL_MODE=@@SQL_MODE, SQL_MODE='ONLY_FULL_GROUP_BY,STRICT_TRANS_TABLES,NO_ZERO_IN_DATE,NO_ZERO_DATE,ERROR_FOR_DIVISION_BY_ZERO,NO_ENGINE_SUBSTITUTION';";

static DEFAULT_POSTAMBLE: &str = "SET SQL_MODE=@OLD_SQL_MODE;
SET FOREIGN_KEY_CHECKS=@OLD_FOREIGN_KEY_CHECKS;
SET UNIQUE_CHECKS=@OLD_UNIQUE_CHECKS;";

/// Generates MySQL DDL.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlRenderer;

impl MySqlRenderer {
    fn get_schema_sql(schema: &ErSchema, options: &RenderOptions) -> String {
        if !options.keep_schemata {
            return String::new();
        }

        let mut sql = format!("-- Schema {}\n", schema.name);

        if options.generate_schema_drops {
            sql.push_str(&format!("DROP SCHEMA IF EXISTS {};\n", schema.name.quote()));
        }

        sql.push_str(&format!("CREATE SCHEMA IF NOT EXISTS {}", schema.name.quote()));
        if !schema.default_character_set_name.is_empty() {
            sql.push_str(" DEFAULT CHARACTER SET ");
            sql.push_str(&schema.default_character_set_name);
        }
        if !schema.default_collation_name.is_empty() {
            sql.push_str(" COLLATE ");
            sql.push_str(&schema.default_collation_name);
        }
        sql.push(';');

        sql
    }

    fn get_table_sql(table: &ErTable, schema_name: Option<&str>, supports_visibility: bool, options: &RenderOptions) -> String {
        let table_name = quote_qualified(schema_name, &table.name);

        let mut sql = format!("-- Table {}\n", table_name);

        if options.generate_drops {
            sql.push_str(&format!("DROP TABLE IF EXISTS {};\n", table_name));
        }

        let mut query_builder = DdlQueryBuilder::new();
        let mut table_builder = query_builder.create_table(&table_name);

        for column in &table.columns {
            let mut column_builder = table_builder.column(&column.name, &column.formatted_type);

            if !column.character_set_name.is_empty() {
                column_builder.character_set(&column.character_set_name);
            }

            if column.is_not_null {
                column_builder.not_null();
            } else {
                column_builder.null();
            }

            if !column.default_value.is_empty() {
                column_builder.default_value(&column.default_value);
            }

            if column.auto_increment {
                column_builder.auto_increment();
            }

            if !column.comment.is_empty() {
                column_builder.comment(&column.comment);
            }
        }

        for index in &table.indices {
            let keyword = match index.index_type {
                ErIndexType::Primary => {
                    table_builder.primary_key(index.columns.iter().map(|c| c.name.as_str()));
                    continue;
                }
                ErIndexType::Unique => "UNIQUE INDEX",
                ErIndexType::Index => "INDEX",
                ErIndexType::Fulltext => "FULLTEXT INDEX",
            };

            let mut index_builder = table_builder.index(keyword, &index.name, index.columns.iter().map(|c| (c.name.as_str(), c.descending)));
            if !index.comment.is_empty() {
                index_builder.comment(&index.comment);
            }
            if supports_visibility {
                index_builder.visible();
            }
        }

        let materialized_keys = table.foreign_keys.iter().filter(|fk| !fk.model_only).collect_vec();

        if !options.skip_fk_indexes {
            for foreign_key in &materialized_keys {
                let columns = if foreign_key.index.columns.is_empty() {
                    foreign_key.columns.iter().map(|c| (c.as_str(), false)).collect_vec()
                } else {
                    foreign_key.index.columns.iter().map(|c| (c.name.as_str(), c.descending)).collect_vec()
                };

                let mut index_builder = table_builder.index("INDEX", &foreign_key.index.name, columns);
                if supports_visibility {
                    index_builder.visible();
                }
            }
        }

        if !options.skip_foreign_keys {
            for foreign_key in &materialized_keys {
                table_builder
                    .foreign_key(
                        &foreign_key.name,
                        &foreign_key.columns,
                        &quote_qualified(schema_name, &foreign_key.referenced_table),
                        &foreign_key.referenced_columns,
                    )
                    .on_delete(&foreign_key.delete_rule)
                    .on_update(&foreign_key.update_rule);
            }
        }

        if !table.table_engine.is_empty() {
            table_builder.table_option("ENGINE", &table.table_engine);
        }

        if !table.default_character_set_name.is_empty() {
            table_builder.table_option("DEFAULT CHARACTER SET", &table.default_character_set_name);
        }

        if !table.comment.is_empty() {
            table_builder.comment(&table.comment);
        }

        sql.push_str(&query_builder.build());

        sql
    }
}

/// Index visibility exists from MySQL 8 onwards.
fn supports_index_visibility(version: &str) -> bool {
    version
        .split('.')
        .next()
        .and_then(|major| major.trim().parse::<u32>().ok())
        .is_some_and(|major| major >= 8)
}

impl SqlRenderer for MySqlRenderer {
    #[instrument(skip_all)]
    fn generate_create_statements(&self, catalog: &mut ErCatalog, version: &str, options: &RenderOptions) -> Result<()> {
        let supports_visibility = supports_index_visibility(version);

        for schema in &mut catalog.schemas {
            schema.temp_sql = Self::get_schema_sql(schema, options);

            let schema_name = if options.omit_schemas { None } else { Some(schema.name.clone()) };

            for table in &mut schema.tables {
                table.temp_sql = Self::get_table_sql(table, schema_name.as_deref(), supports_visibility, options);
            }
        }

        Ok(())
    }

    #[instrument(skip_all)]
    fn create_script_for_catalog_objects<W: Write>(&self, sink: &mut W, catalog: &ErCatalog, options: &ScriptOptions) -> Result<()> {
        let preamble = catalog.custom_data.get(PREAMBLE_KEY).map(|s| s.as_str()).unwrap_or(DEFAULT_PREAMBLE);
        let postamble = catalog.custom_data.get(POSTAMBLE_KEY).map(|s| s.as_str()).unwrap_or(DEFAULT_POSTAMBLE);

        let statements = std::iter::once(preamble)
            .chain(catalog.schemas.iter().flat_map(|schema| {
                std::iter::once(schema.temp_sql.as_str()).chain(schema.tables.iter().map(|t| t.temp_sql.as_str()))
            }))
            .chain(std::iter::once(postamble))
            .filter(|s| !s.is_empty());

        let mut is_empty = true;
        for statement in statements {
            if !is_empty {
                sink.write_all(options.statement_separator.as_bytes())?;
            }
            sink.write_all(statement.as_bytes())?;
            is_empty = false;
        }

        if !is_empty {
            sink.write_all(b"\n")?;
        }

        sink.flush()?;

        Ok(())
    }
}
