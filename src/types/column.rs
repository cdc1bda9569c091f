use super::index_info::IndexInfo;
use heck::ToSnakeCase;
use std::fmt;

/// A column of a [`TableMetadata`](super::TableMetadata)
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub column_name: String,
    pub escaped_column_name: String,
    pub property_name: String, // snake_case
    pub property_type: String,
    /// `use` paths the property type needs
    pub type_imports: Vec<String>,
    pub nullable: bool,
    pub auto_increment: bool,

    // Only set through table classification
    pub(crate) primary_key: bool,
    pub(crate) index_column: bool,
    pub(crate) index_info: Option<IndexInfo>,
}

/// Position of a column in its table's column list
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct ColumnId(pub(crate) usize);

impl Column {
    pub fn new(column_name: impl Into<String>) -> Self {
        let column_name = column_name.into();

        Self {
            escaped_column_name: column_name.clone(),
            property_name: column_name.to_snake_case(),
            property_type: String::new(),
            type_imports: vec![],
            nullable: true,
            auto_increment: false,
            primary_key: false,
            index_column: false,
            index_info: None,
            column_name,
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_index_column(&self) -> bool {
        self.index_column
    }

    pub fn index_info(&self) -> Option<&IndexInfo> {
        self.index_info.as_ref()
    }
}

impl ColumnId {
    /// Position in [`TableMetadata::columns`](super::TableMetadata::columns)
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({})", self.0)
    }
}
