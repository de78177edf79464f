pub mod catalog;
pub mod level;
