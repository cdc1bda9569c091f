use mybatis_generator::{
    config::{GeneratorConfig, TableConfiguration},
    customize::LayeredImports,
    dialect::DatabaseDialects,
    toml_generator::{manifest_file_name, table_manifest, write_table_manifest},
    types::{Column, IndexInfo, TableMetadata},
    GeneratorError,
};
use pretty_assertions::assert_eq;
use std::{env, fs, path::PathBuf};

const CONFIG: &str = r#"
database_url = "sqlite://chinook.db"
output_dir = "out"
dialect = "MySQL"

[base]
root_package = "music"

[[tables]]
table_name = "Album"
escape = true
primary_key_columns = ["AlbumId"]
entity_name = "Record"

[[tables]]
table_name = "Artist"
index_columns = ["Name"]
service_package = "services"
"#;

#[test]
fn parses_table_configuration() {
    let config = GeneratorConfig::from_toml(CONFIG).unwrap();

    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.dialect().unwrap(), DatabaseDialects::MySql);
    assert_eq!(config.base.root_package.as_deref(), Some("music"));

    let album = config.table("Album").unwrap();
    assert_eq!(album.escape, Some(true));
    assert_eq!(album.primary_key_columns, vec!["AlbumId"]);
    assert_eq!(album.base.entity_name.as_deref(), Some("Record"));

    let artist = config.table("Artist").unwrap();
    assert_eq!(artist.index_columns, vec!["Name"]);
    assert_eq!(artist.base.service_package.as_deref(), Some("services"));
    assert!(config.table("Track").is_none());
}

#[test]
fn rejects_unknown_dialect() {
    let config = GeneratorConfig::from_toml(
        r#"
        database_url = "sqlite://chinook.db"
        dialect = "Informix"
        "#,
    )
    .unwrap();

    assert!(matches!(config.dialect(), Err(GeneratorError::UnsupportedDialect(_))));
}

#[test]
fn missing_database_url_is_a_parse_error() {
    assert!(matches!(
        GeneratorConfig::from_toml(r#"dialect = "MySQL""#),
        Err(GeneratorError::ParseConfig(_))
    ));
}

#[test]
fn missing_config_file() {
    let path = env::temp_dir().join("mybatis_generator_missing").join("generator.toml");

    assert!(matches!(
        GeneratorConfig::load(&path),
        Err(GeneratorError::ReadConfig { .. })
    ));
}

fn users() -> TableMetadata {
    let mut table = TableMetadata::new("users");
    table.table_type = "TABLE".into();

    let mut id = Column::new("id");
    id.property_type = "i64".into();
    id.nullable = false;
    table.add_column(id);
    table.add_column(Column::new("name"));
    table.add_column(Column::new("email"));

    table
        .add_primary_key_column("id")
        .add_index_column(IndexInfo::new("users_email_key", "email").unique());
    table.customize(&TableConfiguration::new("users"), &LayeredImports);
    table
}

#[test]
fn manifest_lists_classification_and_imports() {
    let manifest: toml::Value = table_manifest(&users()).unwrap().parse().unwrap();

    assert_eq!(manifest["table_name"].as_str(), Some("users"));
    assert_eq!(manifest["entity_name"].as_str(), Some("Users"));
    assert_eq!(manifest["primary_key_columns"], toml::Value::Array(vec!["id".into()]));
    assert_eq!(manifest["index_columns"], toml::Value::Array(vec!["email".into()]));
    assert_eq!(manifest["packages"]["mapper"].as_str(), Some("crate::mapper"));
    assert_eq!(
        manifest["imports"]["mapper"],
        toml::Value::Array(vec!["crate::entity::users::Users".into()])
    );

    let columns = manifest["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0]["primary_key"].as_bool(), Some(true));
    assert_eq!(columns[0]["property_type"].as_str(), Some("i64"));
    assert!(columns[1].get("index").is_none());
    assert_eq!(columns[2]["index"]["index_name"].as_str(), Some("users_email_key"));
    assert_eq!(columns[2]["index"]["unique"].as_bool(), Some(true));
}

#[test]
fn writes_manifest_file() {
    let dir = env::temp_dir().join(format!("mybatis_generator_manifest_{}", std::process::id()));

    let path = write_table_manifest(&dir, &users()).unwrap();

    assert_eq!(path, dir.join("users.toml"));
    assert_eq!(fs::read_to_string(&path).unwrap(), table_manifest(&users()).unwrap());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_table_has_a_manifest() {
    let manifest: toml::Value = table_manifest(&TableMetadata::new("users"))
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(manifest["table_name"].as_str(), Some("users"));
    assert_eq!(manifest["primary_key_columns"], toml::Value::Array(vec![]));
    assert!(manifest.get("columns").is_none());
}

#[test]
fn manifest_stays_inside_output_dir() {
    let root = env::temp_dir().join(format!("mybatis_generator_escape_{}", std::process::id()));
    let dir = root.join("generated");

    let path = write_table_manifest(&dir, &TableMetadata::new("../escaped")).unwrap();

    assert_eq!(path, dir.join("escaped.toml"));
    assert!(path.exists());
    assert!(!root.join("escaped.toml").exists());

    let path = write_table_manifest(&dir, &TableMetadata::new("Order Lines")).unwrap();
    assert_eq!(path, dir.join("order_lines.toml"));

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn unusable_table_name_is_rejected() {
    let table = TableMetadata::new("/..");

    assert!(matches!(
        manifest_file_name(&table),
        Err(GeneratorError::InvalidTableName(ref name)) if name == "/.."
    ));
}
