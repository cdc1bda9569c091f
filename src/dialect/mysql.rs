use super::{DatabaseDialect, DatabaseDialects};

/// MySQL quotes identifiers with backticks
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl DatabaseDialect for MySqlDialect {
    fn database_name(&self) -> &'static str {
        DatabaseDialects::MySql.database_name()
    }

    fn beginning_delimiter(&self) -> &'static str {
        "`"
    }

    fn ending_delimiter(&self) -> &'static str {
        "`"
    }
}
