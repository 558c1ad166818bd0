#[cfg(test)]
mod test_helpers;

mod models;
mod error;
mod quoting;
mod ddl_query_builder;
mod normalize;
mod render;
mod script;
mod table_filter;
mod pipeline;

pub use error::*;
pub use models::*;
pub use normalize::*;
pub use render::*;
pub use script::*;
pub use table_filter::*;
pub use pipeline::*;
