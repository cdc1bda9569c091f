use crate::column_mapping::{is_primary_key, map_column};
use crate::config::{BaseConfiguration, GeneratorConfig, TableConfiguration};
use crate::customize::TableCustomizer;
use crate::dialect::{escape_if_needed, DatabaseDialect};
use crate::error::{GeneratorError, Result};
use crate::types::{IndexInfo, TableMetadata};
use sea_query::{ColumnDef, IndexCreateStatement, TableCreateStatement};
use sea_schema::sqlite::def::{Schema, TableDef};
use sea_schema::sqlite::discovery::SchemaDiscovery;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use tracing::{debug, info};

pub const TABLE_TYPE: &str = "TABLE";

/// Discover the database schema and build the metadata of every configured
/// table (every table when none are configured), in catalog order.
pub async fn get_tables(
    connection: Pool<Sqlite>,
    config: &GeneratorConfig,
    dialect: &dyn DatabaseDialect,
    customizer: &dyn TableCustomizer,
) -> Result<Vec<TableMetadata>> {
    let schema_discovery = SchemaDiscovery::new(connection.clone());

    let schema: Schema = schema_discovery
        .discover()
        .await
        .map_err(|err| GeneratorError::Discovery(format!("{:?}", err)))?;

    info!(tables = schema.tables.len(), "discovered schema");

    if let Some(missing) = config.tables.iter().find(|table_config| {
        !schema
            .tables
            .iter()
            .any(|table: &TableDef| table.name == table_config.table_name)
    }) {
        return Err(GeneratorError::UnknownTable(missing.table_name.clone()));
    }

    let selected: Vec<(&TableDef, TableConfiguration)> = schema
        .tables
        .iter()
        .filter_map(|table: &TableDef| {
            if config.tables.is_empty() {
                Some((table, TableConfiguration::new(table.name.as_str())))
            } else {
                config.table(&table.name).map(|table_config| (table, table_config.clone()))
            }
        })
        .collect();

    let mut tables = Vec::with_capacity(selected.len());

    for (table, table_config) in selected {
        let table_create_stmt: TableCreateStatement = table.write();
        let indexes = get_indexes(&connection, &table.name).await?;

        tables.push(build_table(
            &table.name,
            &table_create_stmt,
            &indexes,
            &table_config,
            &config.base,
            dialect,
            customizer,
        )?);
    }

    Ok(tables)
}

/// Secondary indexes of `table_name`, one [`IndexInfo`] per indexed column.
///
/// Reads `PRAGMA index_list` / `PRAGMA index_info` directly: the implicit
/// indexes behind `UNIQUE` constraints have no `sql` in `sqlite_master`, and
/// the primary key index (origin `pk`) is classified from the table
/// definition instead. Expression columns have no name and are skipped.
pub async fn get_indexes(connection: &Pool<Sqlite>, table_name: &str) -> Result<Vec<IndexInfo>> {
    let index_list: Vec<SqliteRow> =
        sqlx::query(&format!("PRAGMA index_list({})", string_literal(table_name)))
            .fetch_all(connection)
            .await?;

    let mut indexes = Vec::new();

    for row in index_list {
        let index_name: String = row.try_get("name")?;
        let unique: i64 = row.try_get("unique")?;
        let origin: String = row.try_get("origin")?;

        if origin == "pk" {
            continue;
        }

        let index_info: Vec<SqliteRow> =
            sqlx::query(&format!("PRAGMA index_info({})", string_literal(&index_name)))
                .fetch_all(connection)
                .await?;

        for column in index_info {
            let seqno: i64 = column.try_get("seqno")?;
            let Some(column_name) = column.try_get::<Option<String>, _>("name")? else {
                continue;
            };

            indexes.push(IndexInfo {
                index_name: index_name.clone(),
                column_name,
                unique: unique != 0,
                ordinal_position: seqno as u32 + 1,
            });
        }
    }

    debug!(table = table_name, entries = indexes.len(), "discovered indexes");
    Ok(indexes)
}

fn string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Turn one table definition into [`TableMetadata`]: map columns, classify
/// the catalog's primary key and `indexes`, then the configured columns, and
/// finally run `customizer`.
pub fn build_table(
    table_name: &str,
    table_create_stmt: &TableCreateStatement,
    indexes: &[IndexInfo],
    table_config: &TableConfiguration,
    base: &BaseConfiguration,
    dialect: &dyn DatabaseDialect,
    customizer: &dyn TableCustomizer,
) -> Result<TableMetadata> {
    let mut table = TableMetadata::new(table_name);
    table.escaped_table_name = escape_if_needed(dialect, table_name, table_config.escape);
    table.table_type = TABLE_TYPE.into();
    table.base = base.merged(&table_config.base);

    let columns: &Vec<ColumnDef> = table_create_stmt.get_columns();

    for column in columns {
        let mapped = map_column(column, dialect);
        table.auto_increment |= mapped.auto_increment;
        table.add_column(mapped);
    }

    // Column level for AUTOINCREMENT keys, table level for everything else
    for column in columns.iter().filter(|column| is_primary_key(column)) {
        table.add_primary_key_column(&column.get_column_name());
    }

    for index in table_create_stmt
        .get_indexes()
        .iter()
        .filter(|index: &&IndexCreateStatement| index.is_primary_key())
    {
        for column_name in index.get_index_spec().get_column_names() {
            table.add_primary_key_column(&column_name);
        }
    }

    for index_info in indexes {
        table.add_index_column(index_info.clone());
    }

    for column_name in &table_config.primary_key_columns {
        table.try_add_primary_key_column(column_name)?;
    }

    for column_name in &table_config.index_columns {
        let index_name = format!("idx_{}_{}", table_name, column_name);

        table.try_add_index_column(IndexInfo::new(index_name, column_name.as_str()))?;
    }

    table.customize(table_config, customizer);

    debug!(
        table = table_name,
        escaped = %table.escaped_table_name,
        columns = table.columns().len(),
        primary_key = table.primary_key_column_ids().len(),
        indexes = table.index_column_ids().len(),
        "built table metadata"
    );

    Ok(table)
}
