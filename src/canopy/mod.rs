pub mod cache;
pub mod generator;
