use crate::modules::timetable::adapters::outbound::timetable_store_in_memory::InMemoryTimetableStore;
use crate::modules::timetable::core::entry::{EntryEdit, NewEntry};
use crate::modules::timetable::core::ports::TimetableStore;
use crate::modules::timetable::core::sequence::is_consistent;
use crate::modules::timetable::session::{SessionConfig, SessionReport, TimetableSession};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

fn fields(title: &str, duration: &str) -> NewEntry {
    NewEntry {
        title: title.into(),
        duration: duration.parse().unwrap(),
        notes: String::new(),
    }
}

async fn drain_persisted(reports: &mut UnboundedReceiver<SessionReport>, count: usize) {
    for _ in 0..count {
        match reports.recv().await {
            Some(SessionReport::Persisted { .. }) => {}
            other => panic!("expected Persisted, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn plans_a_day_from_the_open_time() {
    let store = Arc::new(InMemoryTimetableStore::new());
    let (session, mut reports) =
        TimetableSession::open("guest", store.clone(), SessionConfig::default())
            .await
            .unwrap();

    session.set_open_time("08:00".parse().unwrap()).await.unwrap();
    for (title, duration) in [("Breakfast", "00:30"), ("Commute", "00:45"), ("Work", "08:00")] {
        session.add_entry(fields(title, duration)).await.unwrap();
    }
    drain_persisted(&mut reports, 4).await;

    let timetable = session.snapshot().await;
    let ends: Vec<_> = timetable.entries.iter().map(|e| e.end_time.to_string()).collect();
    assert_eq!(ends, vec!["08:30", "09:15", "17:15"]);
    assert_eq!(timetable.max_order_id, 3);

    let stored = store.list_entries("guest").await.unwrap();
    assert_eq!(stored, timetable.entries);
}

#[tokio::test]
async fn keeps_ranks_dense_through_reorder_and_delete() {
    let store = Arc::new(InMemoryTimetableStore::new());
    let (session, mut reports) =
        TimetableSession::open("user-1", store.clone(), SessionConfig::default())
            .await
            .unwrap();
    session.set_open_time("08:00".parse().unwrap()).await.unwrap();
    for (title, duration) in [("a", "00:10"), ("b", "00:20"), ("c", "00:30")] {
        session.add_entry(fields(title, duration)).await.unwrap();
    }

    let reordered = session.reorder(0, Some(2)).await.unwrap();
    let titles: Vec<_> = reordered.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "c", "a"]);
    assert!(is_consistent(&reordered.entries, reordered.open_time));

    let middle = reordered.entries[1].entry_id.clone();
    let after_delete = session.delete_entry(&middle).await.unwrap();
    let ranks: Vec<_> = after_delete.entries.iter().map(|e| e.order_id).collect();
    assert_eq!(ranks, vec![1, 2]);
    assert!(is_consistent(&after_delete.entries, after_delete.open_time));
    assert_eq!(after_delete.max_order_id, 3);

    let added = session.add_entry(fields("d", "00:05")).await.unwrap();
    assert_eq!(added.order_id, 3);
    assert_eq!(session.snapshot().await.max_order_id, 4);

    drain_persisted(&mut reports, 7).await;
    let reloaded = session.reload().await.unwrap();
    assert_eq!(reloaded, session.snapshot().await);
    assert!(is_consistent(&reloaded.entries, reloaded.open_time));
}

#[tokio::test(start_paused = true)]
async fn recomputes_once_after_a_burst_of_duration_edits() {
    let store = Arc::new(InMemoryTimetableStore::new());
    let (mut session, mut reports) =
        TimetableSession::open("user-1", store.clone(), SessionConfig::default())
            .await
            .unwrap();
    session.set_open_time("09:00".parse().unwrap()).await.unwrap();
    let first = session.add_entry(fields("a", "00:15")).await.unwrap();
    session.add_entry(fields("b", "00:15")).await.unwrap();
    session
        .edit_field(&first.entry_id, EntryEdit::Title("standup".into()))
        .await
        .unwrap();

    for duration in ["00:20", "00:25", "00:30"] {
        session
            .edit_field(&first.entry_id, EntryEdit::Duration(duration.parse().unwrap()))
            .await
            .unwrap();
    }
    let stale = session.snapshot().await;
    assert_eq!(stale.entries[1].end_time.to_string(), "09:30");

    let recomputed = loop {
        match reports.recv().await {
            Some(SessionReport::Recomputed { entries }) => break entries,
            Some(_) => continue,
            None => panic!("session reports closed"),
        }
    };

    let ends: Vec<_> = recomputed.iter().map(|e| e.end_time.to_string()).collect();
    assert_eq!(ends, vec!["09:30", "09:45"]);
    assert_eq!(recomputed[0].title, "standup");
    assert!(!session.has_pending_recompute());
    assert!(!session.close());
}
