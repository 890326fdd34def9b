use crate::modules::timetable::core::mutations::StoreMutation;
use crate::modules::timetable::core::ports::{StoreError, TimetableStore};
use crate::modules::timetable::core::state::{Timetable, TimetableSettings};
use crate::shared::core::clock_time::ClockTime;

/// Read one owner's timetable. Owners without stored settings start at `default_open_time`.
pub async fn load_timetable<TStore>(
    store: &TStore,
    owner_id: &str,
    default_open_time: ClockTime,
) -> Result<Timetable, StoreError>
where
    TStore: TimetableStore + ?Sized,
{
    let settings = store
        .load_settings(owner_id)
        .await?
        .unwrap_or(TimetableSettings {
            open_time: default_open_time,
            max_order_id: 0,
        });
    let entries = store.list_entries(owner_id).await?;
    Ok(Timetable::from_parts(owner_id, settings, entries))
}

/// Persist mutations in order. Stops at the first failure; earlier writes stay applied.
pub async fn dispatch_mutations<TStore>(
    store: &TStore,
    owner_id: &str,
    mutations: Vec<StoreMutation>,
) -> Result<(), StoreError>
where
    TStore: TimetableStore + ?Sized,
{
    tracing::debug!(owner_id, count = mutations.len(), "dispatching timetable mutations");
    for mutation in mutations {
        let kind = mutation.kind();
        let result = match mutation {
            StoreMutation::PutEntry(entry) => store.put_entry(owner_id, entry).await,
            StoreMutation::PutEntries(entries) => store.put_entries_batch(owner_id, entries).await,
            StoreMutation::DeleteEntry(entry_id) => store.delete_entry(owner_id, &entry_id).await,
            StoreMutation::PutSettings(settings) => store.save_settings(owner_id, settings).await,
        };
        if let Err(error) = result {
            tracing::warn!(owner_id, kind, %error, "timetable mutation failed");
            return Err(error);
        }
    }
    Ok(())
}
