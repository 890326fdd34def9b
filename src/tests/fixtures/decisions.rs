use crate::modules::timetable::core::decision::Decision;
use crate::modules::timetable::core::mutations::StoreMutation;
use crate::modules::timetable::core::state::Timetable;

pub fn accepted(decision: Decision) -> (Timetable, Vec<StoreMutation>) {
    match decision {
        Decision::Accepted {
            timetable,
            mutations,
        } => (timetable, mutations),
        other => panic!("expected Accepted, got {other:?}"),
    }
}
