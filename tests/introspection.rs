use mybatis_generator::{
    config::{GeneratorConfig, TableConfiguration},
    customize::NoopCustomizer,
    database_schema::{get_indexes, get_tables},
    dialect::DatabaseDialects,
    types::{Column, TableMetadata},
    GeneratorError,
};
use pretty_assertions::assert_eq;
use sqlx::{
    sqlite::{SqlitePool, SqlitePoolOptions},
    Pool, Sqlite,
};

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (id INTEGER PRIMARY KEY, email TEXT NOT NULL UNIQUE, name TEXT)",
    "CREATE INDEX idx_users_name ON users (name)",
    "CREATE TABLE line (order_id INTEGER NOT NULL, line_no INTEGER NOT NULL, sku TEXT, PRIMARY KEY (order_id, line_no))",
    "CREATE INDEX idx_line_sku ON line (sku, order_id)",
    "CREATE TABLE seq (id INTEGER PRIMARY KEY AUTOINCREMENT, label TEXT)",
];

// A single connection, since every connection to `sqlite::memory:` opens its own database
async fn connect() -> Pool<Sqlite> {
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }

    pool
}

fn config(tables: &[&str]) -> GeneratorConfig {
    let mut config = GeneratorConfig::from_toml(r#"database_url = "sqlite::memory:""#).unwrap();
    config.tables = tables.iter().copied().map(TableConfiguration::new).collect();
    config
}

async fn introspect(pool: &Pool<Sqlite>, tables: &[&str]) -> Vec<TableMetadata> {
    get_tables(
        pool.clone(),
        &config(tables),
        DatabaseDialects::Sqlite.dialect(),
        &NoopCustomizer,
    )
    .await
    .unwrap()
}

fn names<'a>(columns: impl Iterator<Item = &'a Column>) -> Vec<&'a str> {
    columns.map(|column| column.column_name.as_str()).collect()
}

fn find<'a>(tables: &'a [TableMetadata], table_name: &str) -> &'a TableMetadata {
    tables
        .iter()
        .find(|table| table.table_name == table_name)
        .unwrap()
}

#[tokio::test]
async fn every_table_without_configured_tables() {
    let pool = connect().await;

    let tables = introspect(&pool, &[]).await;

    let mut table_names: Vec<&str> = tables.iter().map(|table| table.table_name.as_str()).collect();
    table_names.sort_unstable();
    assert_eq!(table_names, vec!["line", "seq", "users"]);
}

#[tokio::test]
async fn only_configured_tables() {
    let pool = connect().await;

    let tables = introspect(&pool, &["line", "users"]).await;

    let mut table_names: Vec<&str> = tables.iter().map(|table| table.table_name.as_str()).collect();
    table_names.sort_unstable();
    assert_eq!(table_names, vec!["line", "users"]);
}

#[tokio::test]
async fn missing_configured_table() {
    let pool = connect().await;

    let err = get_tables(
        pool.clone(),
        &config(&["users", "missing"]),
        DatabaseDialects::Sqlite.dialect(),
        &NoopCustomizer,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GeneratorError::UnknownTable(name) if name == "missing"));
}

#[tokio::test]
async fn primary_keys_from_catalog() {
    let pool = connect().await;

    let tables = introspect(&pool, &[]).await;

    let users = find(&tables, "users");
    assert!(!users.auto_increment);
    assert_eq!(names(users.primary_key_columns()), vec!["id"]);

    let line = find(&tables, "line");
    assert_eq!(names(line.primary_key_columns()), vec!["order_id", "line_no"]);
    assert!(!line.column_by_name("sku").unwrap().is_primary_key());

    let seq = find(&tables, "seq");
    assert!(seq.auto_increment);
    assert_eq!(names(seq.primary_key_columns()), vec!["id"]);
    assert_eq!(seq.index_columns().len(), 0);
}

#[tokio::test]
async fn indexes_from_catalog() {
    let pool = connect().await;

    let tables = introspect(&pool, &["users", "line"]).await;

    let users = find(&tables, "users");
    let mut indexed = names(users.index_columns());
    indexed.sort_unstable();
    assert_eq!(indexed, vec!["email", "name"]);

    let email = users.column_by_name("email").and_then(|column| column.index_info()).unwrap();
    assert!(email.unique);
    assert!(email.index_name.starts_with("sqlite_autoindex_users"));

    let name = users.column_by_name("name").and_then(|column| column.index_info()).unwrap();
    assert!(!name.unique);
    assert_eq!(name.index_name, "idx_users_name");
    assert_eq!(name.ordinal_position, 1);

    assert!(users.column_by_name("id").and_then(|column| column.index_info()).is_none());

    let line = find(&tables, "line");
    let order_id = line.column_by_name("order_id").and_then(|column| column.index_info()).unwrap();
    assert_eq!(order_id.index_name, "idx_line_sku");
    assert_eq!(order_id.ordinal_position, 2);
    assert!(line.column_by_name("line_no").unwrap().index_info().is_none());
}

#[tokio::test]
async fn primary_key_index_is_not_listed() {
    let pool = connect().await;

    let mut indexes = get_indexes(&pool, "line").await.unwrap();
    indexes.sort_by_key(|index_info| index_info.ordinal_position);

    let columns: Vec<(&str, &str, u32)> = indexes
        .iter()
        .map(|index_info| {
            (
                index_info.index_name.as_str(),
                index_info.column_name.as_str(),
                index_info.ordinal_position,
            )
        })
        .collect();
    assert_eq!(
        columns,
        vec![("idx_line_sku", "sku", 1), ("idx_line_sku", "order_id", 2)]
    );
}
