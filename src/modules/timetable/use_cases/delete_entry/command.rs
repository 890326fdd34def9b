#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEntry {
    pub entry_id: String,
}
