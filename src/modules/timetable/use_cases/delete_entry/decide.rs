// Pure decision function for deleting an entry.
//
// Responsibilities
// - Reject ids that are not in the timetable.
// - Remove the entry, then renumber and recompute unconditionally, so the ranks close the gap
//   and every later end time moves up.
// - max_order_id is left as it is.

use crate::modules::timetable::core::decision::{DecideError, Decision};
use crate::modules::timetable::core::mutations::{StoreMutation, changed_entries, entry_writes};
use crate::modules::timetable::core::sequence::resequence;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::delete_entry::command::DeleteEntry;

pub fn decide_delete(state: &Timetable, command: DeleteEntry) -> Decision {
    let Some(position) = state.position(&command.entry_id) else {
        return Decision::Rejected {
            reason: DecideError::NotFound(command.entry_id),
        };
    };

    let mut entries = state.entries.clone();
    entries.remove(position);
    let timetable = Timetable {
        entries: resequence(entries, state.open_time),
        ..state.clone()
    };

    let mut mutations = vec![StoreMutation::DeleteEntry(command.entry_id)];
    mutations.extend(entry_writes(changed_entries(
        &state.entries,
        &timetable.entries,
    )));

    Decision::Accepted {
        timetable,
        mutations,
    }
}

#[cfg(test)]
mod delete_entry_decide_tests {
    use super::*;
    use crate::tests::fixtures::decisions::accepted;
    use crate::tests::fixtures::entries::make_timetable;
    use rstest::{fixture, rstest};

    #[fixture]
    fn three_rows() -> Timetable {
        make_timetable("08:00", &[("a", "00:10"), ("b", "00:20"), ("c", "00:30")])
    }

    fn delete(state: &Timetable, index: usize) -> Decision {
        decide_delete(
            state,
            DeleteEntry {
                entry_id: state.entries[index].entry_id.clone(),
            },
        )
    }

    #[rstest]
    fn it_should_close_the_rank_gap_after_a_middle_delete(three_rows: Timetable) {
        let (timetable, _) = accepted(delete(&three_rows, 1));
        let ranks: Vec<_> = timetable.entries.iter().map(|e| e.order_id).collect();
        assert_eq!(ranks, vec![1, 2]);
        assert_eq!(timetable.entries[1].title, "c");
        assert_eq!(timetable.entries[1].end_time.to_string(), "08:40");
        assert_eq!(timetable.max_order_id, 3);
    }

    #[rstest]
    fn it_should_delete_then_write_only_the_shifted_entries(three_rows: Timetable) {
        let removed = three_rows.entries[0].entry_id.clone();
        let (timetable, mutations) = accepted(delete(&three_rows, 0));
        assert_eq!(mutations[0], StoreMutation::DeleteEntry(removed));
        assert_eq!(
            mutations[1],
            StoreMutation::PutEntries(timetable.entries.clone())
        );
        assert_eq!(mutations.len(), 2);
    }

    #[rstest]
    fn it_should_only_delete_when_removing_the_last_entry(three_rows: Timetable) {
        let (timetable, mutations) = accepted(delete(&three_rows, 2));
        assert_eq!(timetable.len(), 2);
        assert!(matches!(&mutations[..], [StoreMutation::DeleteEntry(_)]));
    }

    #[rstest]
    fn it_should_reject_an_unknown_id(three_rows: Timetable) {
        let decision = decide_delete(
            &three_rows,
            DeleteEntry {
                entry_id: "missing".into(),
            },
        );
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::NotFound("missing".into())
            }
        );
    }
}
