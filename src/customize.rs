use crate::config::TableConfiguration;
use crate::types::{ImportTarget, TableMetadata};
use heck::ToSnakeCase;

/// Adjusts a table after introspection, before it is handed to the writers
pub trait TableCustomizer {
    fn customize(&self, _table: &mut TableMetadata, _config: &TableConfiguration) {}
}

/// Leaves the table as introspected
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCustomizer;

impl TableCustomizer for NoopCustomizer {}

/// Fills each import set with the paths generated code for that layer uses
/// from the others, plus the column type imports.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayeredImports;

impl TableCustomizer for LayeredImports {
    fn customize(&self, table: &mut TableMetadata, _config: &TableConfiguration) {
        let base = &table.base;
        let entity_name = base.entity_name(&table.table_name);
        let module = entity_name.to_snake_case();

        let entity_path = format!("{}::{}::{}", base.package(ImportTarget::Entity), module, entity_name);
        let dto_path = format!("{}::{}::{}Dto", base.package(ImportTarget::Dto), module, entity_name);
        let mapper_path = format!("{}::{}::{}Mapper", base.package(ImportTarget::Mapper), module, entity_name);
        let service_path = |target: ImportTarget| {
            format!("{}::{}::{}Service", base.package(target), module, entity_name)
        };
        let service = service_path(ImportTarget::Service);
        let v2_service = service_path(ImportTarget::V2Service);

        let type_imports: Vec<String> = table
            .columns()
            .iter()
            .flat_map(|column| column.type_imports.iter().cloned())
            .collect();
        let key_imports: Vec<String> = table
            .primary_key_columns()
            .flat_map(|column| column.type_imports.iter().cloned())
            .collect();

        let imports = &mut table.imports;

        imports.extend(ImportTarget::Entity, type_imports.iter().cloned());
        imports.extend(ImportTarget::Dto, type_imports);

        imports.add(ImportTarget::Mapper, entity_path);
        imports.extend(ImportTarget::Mapper, key_imports);

        imports.add(ImportTarget::Service, dto_path.clone());
        imports.add(ImportTarget::V2Service, dto_path.clone());

        imports.add(ImportTarget::ServiceImpl, mapper_path.clone());
        imports.add(ImportTarget::ServiceImpl, service.clone());
        imports.add(ImportTarget::V2ServiceImpl, mapper_path);
        imports.add(ImportTarget::V2ServiceImpl, v2_service.clone());

        imports.add(ImportTarget::Web, service);
        imports.add(ImportTarget::Web, dto_path.clone());
        imports.add(ImportTarget::V2Web, v2_service);
        imports.add(ImportTarget::V2Web, dto_path);
    }
}
