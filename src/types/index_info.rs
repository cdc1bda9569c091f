/// One entry of an index, as reported by the catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexInfo {
    pub index_name: String,
    pub column_name: String,
    pub unique: bool,
    /// 1-based position of the column within the index
    pub ordinal_position: u32,
}

impl IndexInfo {
    pub fn new(index_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            column_name: column_name.into(),
            unique: false,
            ordinal_position: 1,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}
