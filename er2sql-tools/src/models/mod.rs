mod catalog;
mod schema;
mod table;
mod column;
mod foreign_key;
mod index;
mod datatype;

pub use catalog::*;
pub use schema::*;
pub use table::*;
pub use column::*;
pub use foreign_key::*;
pub use index::*;
pub use datatype::*;
