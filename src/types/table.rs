use super::column::{Column, ColumnId};
use super::import_packages::ImportPackages;
use super::index_info::IndexInfo;
use crate::config::{BaseConfiguration, TableConfiguration};
use crate::customize::TableCustomizer;
use crate::error::{GeneratorError, Result};
use tracing::{debug, warn};

/// Everything the generator knows about one database table.
///
/// `columns` is the single owner of every [`Column`]. The primary key and
/// index lists only hold [`ColumnId`]s into it, and are filled exclusively by
/// [`add_primary_key_column`](Self::add_primary_key_column) and
/// [`add_index_column`](Self::add_index_column), so a column's flags and its
/// membership in those lists can't disagree.
#[derive(Clone, Debug)]
pub struct TableMetadata {
    pub table_name: String,
    /// Quoted form of `table_name` when it is a keyword or has special characters
    pub escaped_table_name: String,
    pub remarks: String,
    pub table_type: String,
    pub auto_increment: bool,
    pub imports: ImportPackages,
    pub base: BaseConfiguration,

    columns: Vec<Column>,
    primary_key_columns: Vec<ColumnId>,
    index_columns: Vec<ColumnId>,
}

impl TableMetadata {
    pub fn new(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();

        Self {
            escaped_table_name: table_name.clone(),
            table_name,
            remarks: String::new(),
            table_type: String::new(),
            auto_increment: false,
            imports: ImportPackages::default(),
            base: BaseConfiguration::default(),
            columns: vec![],
            primary_key_columns: vec![],
            index_columns: vec![],
        }
    }

    /// Append a column in catalog order
    pub fn add_column(&mut self, column: Column) -> ColumnId {
        let id = ColumnId(self.columns.len());
        self.columns.push(column);
        id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// `None` when `id` came from a table with more columns
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(id.0)
    }

    pub fn column_by_name(&self, column_name: &str) -> Option<&Column> {
        self.position(column_name).and_then(|id| self.column(id))
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key_columns
            .iter()
            .map(|id| &self.columns[id.0])
    }

    pub fn primary_key_column_ids(&self) -> &[ColumnId] {
        &self.primary_key_columns
    }

    pub fn index_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.index_columns.iter().map(|id| &self.columns[id.0])
    }

    pub fn index_column_ids(&self) -> &[ColumnId] {
        &self.index_columns
    }

    /// Mark the first column named `column_name` as part of the primary key.
    ///
    /// An unknown name leaves the table untouched; use
    /// [`try_add_primary_key_column`](Self::try_add_primary_key_column) when
    /// that should be an error.
    pub fn add_primary_key_column(&mut self, column_name: &str) -> &mut Self {
        if self.classify_primary_key(column_name).is_none() {
            warn!(table = %self.table_name, column = column_name, "primary key column not found");
        }
        self
    }

    pub fn try_add_primary_key_column(&mut self, column_name: &str) -> Result<ColumnId> {
        self.classify_primary_key(column_name)
            .ok_or_else(|| self.unknown_column(column_name))
    }

    /// Mark the first column named by `index_info` as an index column and
    /// attach `index_info` to it. Unknown names are ignored.
    pub fn add_index_column(&mut self, index_info: IndexInfo) -> &mut Self {
        if let Err(index_info) = self.classify_index(index_info) {
            warn!(
                table = %self.table_name,
                column = %index_info.column_name,
                index = %index_info.index_name,
                "index column not found"
            );
        }
        self
    }

    pub fn try_add_index_column(&mut self, index_info: IndexInfo) -> Result<ColumnId> {
        self.classify_index(index_info)
            .map_err(|index_info| self.unknown_column(&index_info.column_name))
    }

    /// Hook run once the table is populated and classified
    pub fn customize(&mut self, config: &TableConfiguration, customizer: &dyn TableCustomizer) {
        customizer.customize(self, config);
    }

    fn classify_primary_key(&mut self, column_name: &str) -> Option<ColumnId> {
        let id = self.position(column_name)?;

        if !self.primary_key_columns.contains(&id) {
            self.primary_key_columns.push(id);
        }
        self.columns[id.0].primary_key = true;

        debug!(table = %self.table_name, column = column_name, "primary key column");
        Some(id)
    }

    // Hands the IndexInfo back when no column matches
    fn classify_index(&mut self, index_info: IndexInfo) -> std::result::Result<ColumnId, IndexInfo> {
        let Some(id) = self.position(&index_info.column_name) else {
            return Err(index_info);
        };

        if !self.index_columns.contains(&id) {
            self.index_columns.push(id);
        }

        debug!(
            table = %self.table_name,
            column = %index_info.column_name,
            index = %index_info.index_name,
            "index column"
        );

        let column = &mut self.columns[id.0];
        column.index_column = true;
        column.index_info = Some(index_info);
        Ok(id)
    }

    fn position(&self, column_name: &str) -> Option<ColumnId> {
        self.columns
            .iter()
            .position(|column| column.column_name == column_name)
            .map(ColumnId)
    }

    fn unknown_column(&self, column_name: &str) -> GeneratorError {
        GeneratorError::UnknownColumn {
            table: self.table_name.clone(),
            column: column_name.to_string(),
        }
    }
}
