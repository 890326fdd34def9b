// The sequence fold and the list helpers every decider builds on.
//
// Purpose
// - Derive each entry's end time from the open time and the durations before it.
// - Keep order_id dense and positional.
//
// Boundaries
// - Pure functions over slices and vectors. No input or output.

use crate::modules::timetable::core::decision::Decision;
use crate::modules::timetable::core::entry::Entry;
use crate::modules::timetable::core::mutations::{changed_entries, entry_writes};
use crate::modules::timetable::core::state::Timetable;
use crate::shared::core::clock_time::ClockTime;

/// Left-to-right fold: the first entry ends at `open_time + duration`, every later
/// entry ends at the freshly computed end of its predecessor plus its own duration.
/// Stored end times in the input are never read.
pub fn recompute(entries: &[Entry], open_time: ClockTime) -> Vec<Entry> {
    let mut previous_end = open_time;
    let mut previous_day = 0;
    entries
        .iter()
        .map(|entry| {
            let (end_time, crossed) = previous_end.add_with_overflow(entry.duration);
            previous_end = end_time;
            previous_day += crossed;
            Entry {
                end_time,
                end_day_offset: previous_day,
                ..entry.clone()
            }
        })
        .collect()
}

pub fn renumber(entries: &mut [Entry]) {
    for (rank, entry) in (1u32..).zip(entries.iter_mut()) {
        entry.order_id = rank;
    }
}

pub fn resequence(mut entries: Vec<Entry>, open_time: ClockTime) -> Vec<Entry> {
    renumber(&mut entries);
    recompute(&entries, open_time)
}

/// List-splice move: take the entry out of `from` and insert it at `to`.
/// Both indices must be in range.
pub fn move_entry(entries: &mut Vec<Entry>, from: usize, to: usize) {
    let entry = entries.remove(from);
    entries.insert(to, entry);
}

/// Display view listing titled entries before blank rows. Relative order is kept on both sides.
pub fn titled_first(entries: &[Entry]) -> Vec<Entry> {
    let (mut titled, blank): (Vec<Entry>, Vec<Entry>) =
        entries.iter().cloned().partition(Entry::is_titled);
    titled.extend(blank);
    titled
}

/// True when ranks are dense and every end time matches the fold.
pub fn is_consistent(entries: &[Entry], open_time: ClockTime) -> bool {
    let ranks_are_dense = (1u32..)
        .zip(entries)
        .all(|(rank, entry)| entry.order_id == rank);
    ranks_are_dense && recompute(entries, open_time) == entries
}

/// Recompute-Sequence as a decision over a whole timetable.
pub fn decide_recompute(state: &Timetable) -> Decision {
    let entries = recompute(&state.entries, state.open_time);
    match entry_writes(changed_entries(&state.entries, &entries)) {
        None => Decision::Unchanged,
        Some(write) => Decision::Accepted {
            timetable: Timetable {
                entries,
                ..state.clone()
            },
            mutations: vec![write],
        },
    }
}
