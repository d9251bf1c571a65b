pub mod a001_collection;
pub mod a002_item;
