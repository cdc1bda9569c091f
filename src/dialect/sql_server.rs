use super::{DatabaseDialect, DatabaseDialects};

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl DatabaseDialect for SqlServerDialect {
    fn database_name(&self) -> &'static str {
        DatabaseDialects::SqlServer.database_name()
    }

    fn beginning_delimiter(&self) -> &'static str {
        "["
    }

    fn ending_delimiter(&self) -> &'static str {
        "]"
    }
}
