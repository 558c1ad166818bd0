//! Rules that rewrite a model in place before statements are generated for it.
//!
//! Every rule is idempotent, running it again on its own output changes nothing.

mod table;
mod column;
mod foreign_key;

pub use table::normalize_table;
pub use column::{normalize_columns, NO_DEFAULT_TYPES, NUMERIC_TYPES};
pub use foreign_key::normalize_foreign_keys;

use tracing::instrument;
use crate::models::ErSchema;

/// Runs all normalization rules over every table of the schema.
#[instrument(skip_all, fields(schema = %schema.name))]
pub fn normalize_schema(schema: &mut ErSchema) {
    for table in &mut schema.tables {
        normalize_table(table);
        normalize_columns(table);
        normalize_foreign_keys(table);
    }
}
