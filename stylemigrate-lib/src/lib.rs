//! Bootstrap 3 to Bootstrap 5 migration passes over a single HTML document
//! and its companion stylesheet.

pub mod error;
pub mod files;
pub mod migrate;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod style;
pub mod tables;
pub mod text;

pub use error::{MigrateError, Result};
pub use style::prune::{prune, Pruned};
