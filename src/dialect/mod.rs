pub mod mysql;
pub mod postgresql;
pub mod sql_server;
pub mod sqlite;

pub use mysql::MySqlDialect;
pub use postgresql::PostgreSqlDialect;
pub use sql_server::SqlServerDialect;
pub use sqlite::SqliteDialect;

use crate::error::GeneratorError;
use std::{fmt, str::FromStr};

/// Identifier quoting rules of one database product.
///
/// Implementations are stateless, so a single `&'static` instance per product
/// is shared by every caller (see [`DatabaseDialects::dialect`]).
pub trait DatabaseDialect: fmt::Debug + Send + Sync {
    /// Canonical product name, used as the registry key
    fn database_name(&self) -> &'static str;

    fn beginning_delimiter(&self) -> &'static str;

    fn ending_delimiter(&self) -> &'static str;

    /// Wrap an identifier in this dialect's delimiters. Ending delimiters
    /// inside the identifier are doubled.
    fn escape_identifier(&self, identifier: &str) -> String {
        let ending = self.ending_delimiter();

        format!(
            "{}{}{}",
            self.beginning_delimiter(),
            identifier.replace(ending, &ending.repeat(2)),
            ending
        )
    }
}

/// Registry of the supported database products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseDialects {
    MySql,
    PostgreSql,
    Sqlite,
    SqlServer,
}

impl DatabaseDialects {
    pub const ALL: [DatabaseDialects; 4] = [
        DatabaseDialects::MySql,
        DatabaseDialects::PostgreSql,
        DatabaseDialects::Sqlite,
        DatabaseDialects::SqlServer,
    ];

    pub fn database_name(self) -> &'static str {
        match self {
            DatabaseDialects::MySql => "MySQL",
            DatabaseDialects::PostgreSql => "PostgreSQL",
            DatabaseDialects::Sqlite => "SQLite",
            DatabaseDialects::SqlServer => "Microsoft SQL Server",
        }
    }

    /// Case-insensitive lookup by canonical product name
    pub fn from_database_name(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL
            .into_iter()
            .find(|dialect| dialect.database_name().eq_ignore_ascii_case(name))
    }

    pub fn dialect(self) -> &'static dyn DatabaseDialect {
        match self {
            DatabaseDialects::MySql => &MySqlDialect,
            DatabaseDialects::PostgreSql => &PostgreSqlDialect,
            DatabaseDialects::Sqlite => &SqliteDialect,
            DatabaseDialects::SqlServer => &SqlServerDialect,
        }
    }
}

impl FromStr for DatabaseDialects {
    type Err = GeneratorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_database_name(name)
            .ok_or_else(|| GeneratorError::UnsupportedDialect(name.to_string()))
    }
}

impl fmt::Display for DatabaseDialects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.database_name())
    }
}

// Words reserved by at least one of the supported products
const RESERVED_WORDS: &[&str] = &[
    "add", "all", "alter", "and", "as", "asc", "between", "by", "case", "check", "column",
    "constraint", "create", "cross", "current_date", "current_time", "current_timestamp",
    "database", "default", "delete", "desc", "distinct", "drop", "else", "end", "exists", "for",
    "foreign", "from", "full", "grant", "group", "having", "in", "index", "inner", "insert",
    "into", "is", "join", "key", "left", "like", "limit", "not", "null", "offset", "on", "or",
    "order", "outer", "primary", "references", "right", "rows", "schema", "select", "set",
    "table", "then", "to", "union", "unique", "update", "user", "using", "values", "when",
    "where", "with",
];

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

/// True when `name` can't be used bare in generated SQL: it is a reserved
/// word, starts with a digit, or contains anything besides ASCII
/// alphanumerics and underscores.
pub fn requires_escaping(name: &str) -> bool {
    let starts_with_digit = name.chars().next().map_or(false, |c| c.is_ascii_digit());
    let has_special = name.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'));

    starts_with_digit || has_special || is_reserved_word(name)
}

/// Escape `name` when `force` says so, or when [`requires_escaping`] does if
/// `force` is unset.
pub fn escape_if_needed(dialect: &dyn DatabaseDialect, name: &str, force: Option<bool>) -> String {
    if force.unwrap_or_else(|| requires_escaping(name)) {
        dialect.escape_identifier(name)
    } else {
        name.to_string()
    }
}
