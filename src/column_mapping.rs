use crate::dialect::{escape_if_needed, DatabaseDialect};
use crate::types::Column;
use heck::ToSnakeCase;
use proc_macro2::{TokenStream, TokenTree};
use sea_query::{ColumnDef, ColumnSpec};

// sea_orm::prelude re-exports the field types sea-orm-codegen emits
const PRELUDE_TYPES: &[&str] = &[
    "Date",
    "Time",
    "DateTime",
    "DateTimeWithTimeZone",
    "Decimal",
    "Uuid",
    "Json",
];

pub fn map_column(column: &ColumnDef, dialect: &dyn DatabaseDialect) -> Column {
    let column_name = column.get_column_name();
    let column_spec: &Vec<ColumnSpec> = column.get_column_spec();
    let rs_type: TokenStream = sea_orm_codegen::Column::from(column).get_rs_type();

    let property_type = rs_type.to_string().replace(' ', "");
    let auto_increment = column_spec
        .iter()
        .any(|spec| matches!(spec, ColumnSpec::AutoIncrement));

    let mut mapped = Column::new(column_name.as_str());
    mapped.escaped_column_name = escape_if_needed(dialect, &column_name, None);
    mapped.property_name = column_name.to_snake_case();
    mapped.nullable = property_type.starts_with("Option");
    mapped.type_imports = type_imports(rs_type);
    mapped.property_type = property_type;
    mapped.auto_increment = auto_increment;
    mapped
}

pub fn is_primary_key(column: &ColumnDef) -> bool {
    column
        .get_column_spec()
        .iter()
        .any(|spec| matches!(spec, ColumnSpec::PrimaryKey))
}

/// `use` paths for the prelude types named anywhere in `rs_type`
pub fn type_imports(rs_type: TokenStream) -> Vec<String> {
    let mut imports: Vec<String> = Vec::new();

    for token in rs_type {
        match token {
            TokenTree::Ident(ident) => {
                let ident = ident.to_string();
                if PRELUDE_TYPES.contains(&ident.as_str()) {
                    let path = format!("sea_orm::prelude::{}", ident);
                    if !imports.contains(&path) {
                        imports.push(path);
                    }
                }
            }
            TokenTree::Group(group) => {
                for path in type_imports(group.stream()) {
                    if !imports.contains(&path) {
                        imports.push(path);
                    }
                }
            }
            _ => {}
        }
    }

    imports
}
