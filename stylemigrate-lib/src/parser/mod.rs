pub mod class_index;
pub mod markup;
