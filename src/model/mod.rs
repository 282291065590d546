//! Data model for tables of string fields

mod row;
mod table;

pub use row::Row;
pub use table::Table;
