use crate::modules::timetable::core::mutations::StoreMutation;
use crate::modules::timetable::core::state::Timetable;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("entry {0} not found")]
    NotFound(String),

    #[error("index {index} is out of range for a timetable of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot seed {requested} blank rows at once, the limit is {limit}")]
    TooManyRows { requested: usize, limit: usize },

    #[error("no rank is left above {0}")]
    RankExhausted(u32),
}

/// Outcome of a pure decide function.
///
/// `Accepted` carries the next timetable and the store writes, in order, that persist it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        timetable: Timetable,
        mutations: Vec<StoreMutation>,
    },
    Unchanged,
    Rejected {
        reason: DecideError,
    },
}
