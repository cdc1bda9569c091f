pub mod column;
pub mod import_packages;
pub mod index_info;
pub mod table;

pub use column::{Column, ColumnId};
pub use import_packages::{ImportPackages, ImportTarget};
pub use index_info::IndexInfo;
pub use table::TableMetadata;
