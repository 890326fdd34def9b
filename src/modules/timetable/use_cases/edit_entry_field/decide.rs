// Pure decision function for editing one field of an entry.
//
// Responsibilities
// - Reject ids that are not in the timetable.
// - Update the field in place and write that single entry.
// - Never recompute here. A duration edit leaves end times stale until the caller runs
//   decide_recompute, immediately or after the debounce window.

use crate::modules::timetable::core::decision::{DecideError, Decision};
use crate::modules::timetable::core::mutations::StoreMutation;
use crate::modules::timetable::core::state::Timetable;
use crate::modules::timetable::use_cases::edit_entry_field::command::EditEntryField;

pub fn decide_edit(state: &Timetable, command: EditEntryField) -> Decision {
    let Some(position) = state.position(&command.entry_id) else {
        return Decision::Rejected {
            reason: DecideError::NotFound(command.entry_id),
        };
    };

    let mut timetable = state.clone();
    let entry = &mut timetable.entries[position];
    command.edit.apply_to(entry);
    if *entry == state.entries[position] {
        return Decision::Unchanged;
    }

    Decision::Accepted {
        mutations: vec![StoreMutation::PutEntry(entry.clone())],
        timetable,
    }
}

#[cfg(test)]
mod edit_entry_field_decide_tests {
    use super::*;
    use crate::modules::timetable::core::entry::EntryEdit;
    use crate::tests::fixtures::decisions::accepted;
    use crate::tests::fixtures::entries::make_timetable;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_rows() -> Timetable {
        make_timetable("08:00", &[("a", "00:10"), ("b", "00:20")])
    }

    fn edit(state: &Timetable, index: usize, edit: EntryEdit) -> Decision {
        decide_edit(
            state,
            EditEntryField {
                entry_id: state.entries[index].entry_id.clone(),
                edit,
            },
        )
    }

    #[rstest]
    #[case(EntryEdit::Title("Lunch".into()))]
    #[case(EntryEdit::Notes("bring a book".into()))]
    fn it_should_write_only_the_edited_entry(two_rows: Timetable, #[case] change: EntryEdit) {
        let (timetable, mutations) = accepted(edit(&two_rows, 0, change));
        assert_eq!(
            mutations,
            vec![StoreMutation::PutEntry(timetable.entries[0].clone())]
        );
        assert_eq!(timetable.entries[1], two_rows.entries[1]);
    }

    #[rstest]
    fn it_should_leave_end_times_for_the_recompute(two_rows: Timetable) {
        let (timetable, _) = accepted(edit(&two_rows, 0, EntryEdit::Duration("01:00".parse().unwrap())));
        assert_eq!(timetable.entries[0].duration.to_string(), "01:00");
        assert_eq!(timetable.entries[0].end_time.to_string(), "08:10");
    }

    #[rstest]
    fn it_should_skip_an_edit_that_changes_nothing(two_rows: Timetable) {
        let decision = edit(&two_rows, 1, EntryEdit::Title("b".into()));
        assert_eq!(decision, Decision::Unchanged);
    }

    #[rstest]
    fn it_should_reject_an_unknown_id(two_rows: Timetable) {
        let decision = decide_edit(
            &two_rows,
            EditEntryField {
                entry_id: "missing".into(),
                edit: EntryEdit::Notes(String::new()),
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
