// Pure decision function for moving the open time.
//
// Responsibilities
// - Replace the open time and recompute the whole list unconditionally.
// - Persist the settings even when the open time is the same, plus every entry whose end moved.

use crate::modules::timetable::core::decision::Decision;
use crate::modules::timetable::core::mutations::{StoreMutation, changed_entries, entry_writes};
use crate::modules::timetable::core::sequence::recompute;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::set_open_time::command::SetOpenTime;

pub fn decide_set_open_time(state: &Timetable, command: SetOpenTime) -> Decision {
    let timetable = Timetable {
        open_time: command.open_time,
        entries: recompute(&state.entries, command.open_time),
        ..state.clone()
    };

    let mut mutations: Vec<StoreMutation> =
        entry_writes(changed_entries(&state.entries, &timetable.entries))
            .into_iter()
            .collect();
    mutations.push(StoreMutation::PutSettings(timetable.settings()));

    Decision::Accepted {
        timetable,
        mutations,
    }
}
