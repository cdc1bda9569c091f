use crate::error::{GeneratorError, Result};
use crate::types::{Column, TableMetadata};
use heck::ToSnakeCase;
use serde_derive::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// TOML rendering of a [`TableMetadata`], read by the templates.
///
/// Plain values come before nested tables, which `toml` requires.
#[derive(Serialize)]
pub struct TableManifest {
    pub table_name: String,
    pub escaped_table_name: String,
    pub entity_name: String,
    pub remarks: String,
    pub table_type: String,
    pub auto_increment: bool,
    pub primary_key_columns: Vec<String>,
    pub index_columns: Vec<String>,
    pub packages: BTreeMap<String, String>,
    pub imports: BTreeMap<String, Vec<String>>,
    // An empty array would be a value after the tables above
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnManifest>,
}

#[derive(Serialize)]
pub struct ColumnManifest {
    pub column_name: String,
    pub escaped_column_name: String,
    pub property_name: String,
    pub property_type: String,
    pub nullable: bool,
    pub auto_increment: bool,
    pub primary_key: bool,
    pub index_column: bool,
    pub index: Option<IndexManifest>,
}

#[derive(Serialize)]
pub struct IndexManifest {
    pub index_name: String,
    pub unique: bool,
    pub ordinal_position: u32,
}

impl TableManifest {
    pub fn new(table: &TableMetadata) -> Self {
        let packages: BTreeMap<String, String> = table
            .imports
            .iter()
            .map(|(target, _)| (target.key().to_string(), table.base.package(target)))
            .collect();

        let imports: BTreeMap<String, Vec<String>> = table
            .imports
            .iter()
            .map(|(target, packages)| (target.key().to_string(), packages.iter().cloned().collect()))
            .collect();

        Self {
            table_name: table.table_name.clone(),
            escaped_table_name: table.escaped_table_name.clone(),
            entity_name: table.base.entity_name(&table.table_name),
            remarks: table.remarks.clone(),
            table_type: table.table_type.clone(),
            auto_increment: table.auto_increment,
            primary_key_columns: column_names(table.primary_key_columns()),
            index_columns: column_names(table.index_columns()),
            packages,
            imports,
            columns: table.columns().iter().map(ColumnManifest::new).collect(),
        }
    }
}

impl ColumnManifest {
    fn new(column: &Column) -> Self {
        Self {
            column_name: column.column_name.clone(),
            escaped_column_name: column.escaped_column_name.clone(),
            property_name: column.property_name.clone(),
            property_type: column.property_type.clone(),
            nullable: column.nullable,
            auto_increment: column.auto_increment,
            primary_key: column.is_primary_key(),
            index_column: column.is_index_column(),
            index: column.index_info().map(|info| IndexManifest {
                index_name: info.index_name.clone(),
                unique: info.unique,
                ordinal_position: info.ordinal_position,
            }),
        }
    }
}

fn column_names<'a>(columns: impl Iterator<Item = &'a Column>) -> Vec<String> {
    columns.map(|column| column.column_name.clone()).collect()
}

pub fn table_manifest(table: &TableMetadata) -> Result<String> {
    Ok(toml::to_string_pretty(&TableManifest::new(table))?)
}

/// Manifest file name: the table name in snake_case, so it can't contain
/// path separators or `..`
pub fn manifest_file_name(table: &TableMetadata) -> Result<String> {
    let stem = table.table_name.to_snake_case();

    if stem.is_empty() {
        return Err(GeneratorError::InvalidTableName(table.table_name.clone()));
    }

    Ok(format!("{}.toml", stem))
}

/// Write the manifest into `dir` under [`manifest_file_name`], creating
/// `dir` when missing
pub fn write_table_manifest(dir: &Path, table: &TableMetadata) -> Result<PathBuf> {
    let path = dir.join(manifest_file_name(table)?);
    let manifest = table_manifest(table)?;

    fs::create_dir_all(dir)?;
    fs::write(&path, manifest)?;

    info!(table = %table.table_name, path = %path.display(), "wrote table manifest");
    Ok(path)
}
