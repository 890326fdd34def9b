pub mod decisions;
pub mod entries;
