use indexmap::IndexSet;

/// Generated artifact an import belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImportTarget {
    Entity,
    Dto,
    Mapper,
    Service,
    ServiceImpl,
    Web,
    V2Service,
    V2ServiceImpl,
    V2Web,
}

impl ImportTarget {
    pub const ALL: [ImportTarget; 9] = [
        ImportTarget::Entity,
        ImportTarget::Dto,
        ImportTarget::Mapper,
        ImportTarget::Service,
        ImportTarget::ServiceImpl,
        ImportTarget::Web,
        ImportTarget::V2Service,
        ImportTarget::V2ServiceImpl,
        ImportTarget::V2Web,
    ];

    /// snake_case key used in manifests
    pub fn key(self) -> &'static str {
        match self {
            ImportTarget::Entity => "entity",
            ImportTarget::Dto => "dto",
            ImportTarget::Mapper => "mapper",
            ImportTarget::Service => "service",
            ImportTarget::ServiceImpl => "service_impl",
            ImportTarget::Web => "web",
            ImportTarget::V2Service => "v2_service",
            ImportTarget::V2ServiceImpl => "v2_service_impl",
            ImportTarget::V2Web => "v2_web",
        }
    }
}

/// Per-target import sets. Iteration follows first insertion; re-adding a
/// package is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportPackages {
    pub entity: IndexSet<String>,
    pub dto: IndexSet<String>,
    pub mapper: IndexSet<String>,
    pub service: IndexSet<String>,
    pub service_impl: IndexSet<String>,
    pub web: IndexSet<String>,
    pub v2_service: IndexSet<String>,
    pub v2_service_impl: IndexSet<String>,
    pub v2_web: IndexSet<String>,
}

impl ImportPackages {
    pub fn get(&self, target: ImportTarget) -> &IndexSet<String> {
        match target {
            ImportTarget::Entity => &self.entity,
            ImportTarget::Dto => &self.dto,
            ImportTarget::Mapper => &self.mapper,
            ImportTarget::Service => &self.service,
            ImportTarget::ServiceImpl => &self.service_impl,
            ImportTarget::Web => &self.web,
            ImportTarget::V2Service => &self.v2_service,
            ImportTarget::V2ServiceImpl => &self.v2_service_impl,
            ImportTarget::V2Web => &self.v2_web,
        }
    }

    pub fn get_mut(&mut self, target: ImportTarget) -> &mut IndexSet<String> {
        match target {
            ImportTarget::Entity => &mut self.entity,
            ImportTarget::Dto => &mut self.dto,
            ImportTarget::Mapper => &mut self.mapper,
            ImportTarget::Service => &mut self.service,
            ImportTarget::ServiceImpl => &mut self.service_impl,
            ImportTarget::Web => &mut self.web,
            ImportTarget::V2Service => &mut self.v2_service,
            ImportTarget::V2ServiceImpl => &mut self.v2_service_impl,
            ImportTarget::V2Web => &mut self.v2_web,
        }
    }

    /// Returns false when the package was already present
    pub fn add(&mut self, target: ImportTarget, package: impl Into<String>) -> bool {
        self.get_mut(target).insert(package.into())
    }

    pub fn extend<I>(&mut self, target: ImportTarget, packages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.get_mut(target)
            .extend(packages.into_iter().map(Into::into));
    }

    pub fn iter(&self) -> impl Iterator<Item = (ImportTarget, &IndexSet<String>)> + '_ {
        ImportTarget::ALL
            .into_iter()
            .map(move |target| (target, self.get(target)))
    }
}
