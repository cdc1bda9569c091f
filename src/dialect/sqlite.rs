use super::{DatabaseDialect, DatabaseDialects};

/// SQLite accepts several quoting styles; the generator sticks to the
/// standard double quote.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl DatabaseDialect for SqliteDialect {
    fn database_name(&self) -> &'static str {
        DatabaseDialects::Sqlite.database_name()
    }

    fn beginning_delimiter(&self) -> &'static str {
        "\""
    }

    fn ending_delimiter(&self) -> &'static str {
        "\""
    }
}
