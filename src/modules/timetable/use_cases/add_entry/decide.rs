// Pure decision function for adding entries.
//
// Responsibilities
// - Give every new entry the provisional rank max_order_id + 1 and append it.
// - Resequence, so ranks stay dense and the new end times are derived right away.
// - Persist the new entries and the raised max_order_id. Never lower max_order_id.
// - Reject the add when max_order_id has no rank left to hand out.

use crate::modules::timetable::core::decision::{DecideError, Decision};
use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::mutations::{StoreMutation, changed_entries, entry_writes};
use crate::modules::timetable::core::sequence::resequence;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::add_entry::command::AddEntry;
use crate::shared::core::clock_time::ClockTime;

pub fn decide_add(state: &Timetable, command: AddEntry) -> Decision {
    decide_add_many(state, vec![command])
}

pub fn decide_add_many(state: &Timetable, commands: Vec<AddEntry>) -> Decision {
    if commands.is_empty() {
        return Decision::Unchanged;
    }

    let mut entries = state.entries.clone();
    let mut max_order_id = state.max_order_id;
    for command in commands {
        let Some(next_rank) = max_order_id.checked_add(1) else {
            return Decision::Rejected {
                reason: DecideError::RankExhausted(max_order_id),
            };
        };
        max_order_id = next_rank;
        entries.push(Entry {
            entry_id: command.entry_id,
            order_id: max_order_id,
            title: command.title,
            duration: command.duration,
            end_time: ClockTime::MIDNIGHT,
            end_day_offset: 0,
            notes: command.notes,
            created_at: command.created_at,
        });
    }

    let timetable = Timetable {
        entries: resequence(entries, state.open_time),
        max_order_id,
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
