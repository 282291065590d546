//! csvtable - In-memory tables backed by character-separated value text
//!
//! Rows are split with [`split_row`] and joined with [`join_row`]. A [`Table`]
//! holds the rows along with the separator, comment prefix and quoting used to
//! load and save them.

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod store;

pub use codec::{join_row, split_row};
pub use config::Config;
pub use error::TableError;
pub use model::{Row, Table};
