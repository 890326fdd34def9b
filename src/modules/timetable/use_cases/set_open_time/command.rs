use crate::shared::core::clock_time::ClockTime;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SetOpenTime {
    pub open_time: ClockTime,
}
