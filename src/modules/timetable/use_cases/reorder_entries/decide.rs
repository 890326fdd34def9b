// Pure decision function for moving an entry to another position.
//
// Responsibilities
// - Splice, then give every entry its new positional rank and recompute the end times.
// - Treat a missing or out of range drop slot, or a drop onto the same slot, as a no-op.
// - Reject a source index outside the list.
// - Persist every entry in one atomic batch, so a partial reorder is never visible.

use crate::modules::timetable::core::decision::{DecideError, Decision};
use crate::modules::timetable::core::mutations::StoreMutation;
use crate::modules::timetable::core::sequence::{move_entry, resequence};
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::reorder_entries::command::ReorderEntries;

pub fn decide_reorder(state: &Timetable, command: ReorderEntries) -> Decision {
    let len = state.len();
    if command.from_index >= len {
        return Decision::Rejected {
            reason: DecideError::IndexOutOfRange {
                index: command.from_index,
                len,
            },
        };
    }
    let to_index = match command.to_index {
        Some(to) if to < len && to != command.from_index => to,
        _ => return Decision::Unchanged,
    };

    let mut entries = state.entries.clone();
    move_entry(&mut entries, command.from_index, to_index);
    let entries = resequence(entries, state.open_time);

    Decision::Accepted {
        mutations: vec![StoreMutation::PutEntries(entries.clone())],
        timetable: Timetable {
            entries,
            ..state.clone()
        },
    }
}
