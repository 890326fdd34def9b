use serde::Deserialize;

/// Drag-and-drop move. `to_index` is `None` when the entry was dropped outside any slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReorderEntries {
    pub from_index: usize,
    #[serde(default)]
    pub to_index: Option<usize>,
}
