pub mod column_mapping;
pub mod config;
pub mod customize;
pub mod database_schema;
pub mod dialect;
pub mod error;
pub mod toml_generator;
pub mod types;

pub use error::{GeneratorError, Result};
