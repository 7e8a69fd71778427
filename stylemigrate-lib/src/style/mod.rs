pub mod prune;
pub mod rules;
pub mod selector;
pub mod stylesheet;
pub mod validate;
