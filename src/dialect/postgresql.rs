use super::{DatabaseDialect, DatabaseDialects};

#[derive(Debug, Default, Clone, Copy)]
pub struct PostgreSqlDialect;

impl DatabaseDialect for PostgreSqlDialect {
    fn database_name(&self) -> &'static str {
        DatabaseDialects::PostgreSql.database_name()
    }

    fn beginning_delimiter(&self) -> &'static str {
        "\""
    }

    fn ending_delimiter(&self) -> &'static str {
        "\""
    }
}
