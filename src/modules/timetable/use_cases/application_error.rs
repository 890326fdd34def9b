use crate::modules::timetable::core::decision::DecideError;
use crate::modules::timetable::core::ports::StoreError;
use crate::shared::core::clock_time::InvalidTimeFormat;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Persistence(#[from] StoreError),

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    InvalidTimeFormat(#[from] InvalidTimeFormat),
}
