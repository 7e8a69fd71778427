//! The migration passes. Each takes text and returns text plus what changed;
//! file handling lives in [`crate::pipeline`].

pub mod audit;
pub mod cleanup;
pub mod consolidate;
pub mod markup;
