use crate::dialect::DatabaseDialects;
use crate::error::{GeneratorError, Result};
use crate::types::ImportTarget;
use heck::ToUpperCamelCase;
use serde_derive::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "generator.toml";

/// Top level `generator.toml`
#[derive(Clone, Debug, Deserialize)]
pub struct GeneratorConfig {
    pub database_url: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Canonical product name, see [`DatabaseDialects`]
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Defaults shared by every table
    #[serde(default)]
    pub base: BaseConfiguration,

    /// Tables to generate; empty means all of them
    #[serde(default)]
    pub tables: Vec<TableConfiguration>,
}

fn default_output_dir() -> PathBuf {
    "generated".into()
}

fn default_dialect() -> String {
    DatabaseDialects::Sqlite.database_name().into()
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GeneratorError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn dialect(&self) -> Result<DatabaseDialects> {
        self.dialect.parse()
    }

    pub fn table(&self, table_name: &str) -> Option<&TableConfiguration> {
        self.tables
            .iter()
            .find(|table| table.table_name == table_name)
    }
}

/// Naming and package settings a table inherits. Every field is optional so
/// a `[[tables]]` entry can override just the parts it cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BaseConfiguration {
    pub root_package: Option<String>,
    pub entity_name: Option<String>,
    pub entity_package: Option<String>,
    pub dto_package: Option<String>,
    pub mapper_package: Option<String>,
    pub service_package: Option<String>,
    pub service_impl_package: Option<String>,
    pub web_package: Option<String>,
}

impl BaseConfiguration {
    /// `overrides` wins wherever it sets a value
    pub fn merged(&self, overrides: &BaseConfiguration) -> BaseConfiguration {
        fn pick(over: &Option<String>, base: &Option<String>) -> Option<String> {
            over.clone().or_else(|| base.clone())
        }

        BaseConfiguration {
            root_package: pick(&overrides.root_package, &self.root_package),
            entity_name: pick(&overrides.entity_name, &self.entity_name),
            entity_package: pick(&overrides.entity_package, &self.entity_package),
            dto_package: pick(&overrides.dto_package, &self.dto_package),
            mapper_package: pick(&overrides.mapper_package, &self.mapper_package),
            service_package: pick(&overrides.service_package, &self.service_package),
            service_impl_package: pick(&overrides.service_impl_package, &self.service_impl_package),
            web_package: pick(&overrides.web_package, &self.web_package),
        }
    }

    pub fn root_package(&self) -> &str {
        self.root_package.as_deref().unwrap_or("crate")
    }

    /// Configured entity name, or the table name in UpperCamelCase
    pub fn entity_name(&self, table_name: &str) -> String {
        self.entity_name
            .clone()
            .unwrap_or_else(|| table_name.to_upper_camel_case())
    }

    /// Module path generated code for `target` lives in
    pub fn package(&self, target: ImportTarget) -> String {
        let module = match target {
            ImportTarget::Entity => self.entity_package.as_deref().unwrap_or("entity"),
            ImportTarget::Dto => self.dto_package.as_deref().unwrap_or("dto"),
            ImportTarget::Mapper => self.mapper_package.as_deref().unwrap_or("mapper"),
            ImportTarget::Service | ImportTarget::V2Service => {
                self.service_package.as_deref().unwrap_or("service")
            }
            ImportTarget::ServiceImpl | ImportTarget::V2ServiceImpl => self
                .service_impl_package
                .as_deref()
                .unwrap_or("service_impl"),
            ImportTarget::Web | ImportTarget::V2Web => {
                self.web_package.as_deref().unwrap_or("web")
            }
        };

        match target {
            ImportTarget::V2Service | ImportTarget::V2ServiceImpl | ImportTarget::V2Web => {
                format!("{}::{}::v2", self.root_package(), module)
            }
            _ => format!("{}::{}", self.root_package(), module),
        }
    }
}

/// One `[[tables]]` entry
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TableConfiguration {
    pub table_name: String,

    /// Force (`true`) or suppress (`false`) quoting of the table name
    #[serde(default)]
    pub escape: Option<bool>,

    /// Declared primary key, for tables whose catalog entry has none
    #[serde(default)]
    pub primary_key_columns: Vec<String>,

    #[serde(default)]
    pub index_columns: Vec<String>,

    #[serde(flatten)]
    pub base: BaseConfiguration,
}

impl TableConfiguration {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }
}
