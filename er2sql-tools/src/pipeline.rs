use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, instrument};
use crate::models::ErCatalog;
use crate::normalize::normalize_schema;
use crate::render::SqlRenderer;
use crate::script::generate_sql;
use crate::table_filter::TableFilter;
use crate::Result;

/// The name the processed schema is given in the generated script.
pub const TARGET_SCHEMA_NAME: &str = "db";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PipelineConfig {
    /// Model file to load. When not set the active model is used.
    pub model_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Tables to generate statements for. `None` means all tables.
    pub table_filter: Option<TableFilter>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            output_path: PathBuf::from("./a.sql"),
            table_filter: None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PipelineOutcome {
    /// Neither a model file nor an active model was available. Nothing was written.
    NoModel,
    Written {
        path: PathBuf,
        included: Vec<String>,
        skipped: Vec<String>,
    },
}

/// Normalizes the model and writes its create script to the configured output file.
#[instrument(skip_all, fields(output = %config.output_path.display()))]
pub fn run_pipeline<R: SqlRenderer>(config: &PipelineConfig, active_model: Option<ErCatalog>, renderer: &R) -> Result<PipelineOutcome> {
    let catalog = match &config.model_path {
        Some(path) => Some(ErCatalog::load_json_file(path)?),
        None => active_model,
    };

    let Some(mut catalog) = catalog else {
        info!("No model available, nothing to generate");
        return Ok(PipelineOutcome::NoModel);
    };

    let schema = catalog.first_schema_mut()?;
    schema.name = TARGET_SCHEMA_NAME.to_string();
    normalize_schema(schema);

    let file = File::create(&config.output_path)?;
    let mut writer = BufWriter::new(file);
    let summary = generate_sql(&mut catalog, config.table_filter.as_ref(), &mut writer, renderer)?;
    writer.flush()?;

    info!(included = summary.included.len(), skipped = summary.skipped.len(), "Wrote script");

    Ok(PipelineOutcome::Written {
        path: config.output_path.clone(),
        included: summary.included,
        skipped: summary.skipped,
    })
}
