//! Drag-reorder tests
mod common;

use common::*;
use task_notes::*;

fn ids(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_reorder_within_active_notes_keeps_other_lists() {
    let (mut store, _dir) = get_test_store();
    let n1 = store.add(EntryDraft::note("N1")).unwrap();
    let t1 = store.add(EntryDraft::task("T1")).unwrap();
    let n2 = store.add(EntryDraft::note("N2")).unwrap();
    let t2 = store.add(EntryDraft::task("T2")).unwrap();
    let n3 = store.add(EntryDraft::note("N3")).unwrap();

    assert_eq!(ids(&store.active_notes()), vec![n3.id.clone(), n2.id.clone(), n1.id.clone()]);

    assert!(store.reorder(&n1.id, &n3.id).unwrap());
    assert_eq!(ids(&store.active_notes()), vec![n1.id.clone(), n3.id.clone(), n2.id.clone()]);
    assert_eq!(ids(&store.active_tasks()), vec![t2.id, t1.id]);
}

#[test]
fn test_reorder_downwards() {
    let (mut store, _dir) = get_test_store();
    let c = store.add(EntryDraft::task("C")).unwrap();
    let b = store.add(EntryDraft::task("B")).unwrap();
    let a = store.add(EntryDraft::task("A")).unwrap();

    // A B C -> B A C
    assert!(store.reorder(&a.id, &c.id).unwrap());
    assert_eq!(ids(&store.active_tasks()), vec![b.id, a.id, c.id]);
}

#[test]
fn test_reorder_is_persisted() {
    let (mut store, dir) = get_test_store();
    let first = store.add(EntryDraft::task("First")).unwrap();
    let second = store.add(EntryDraft::task("Second")).unwrap();

    store.reorder(&first.id, &second.id).unwrap();
    let reopened = open_in(&dir);
    assert_eq!(ids(&reopened.active_tasks()), vec![first.id, second.id]);
}

#[test]
fn test_cross_list_drops_are_ignored() {
    let (mut store, _dir) = get_test_store();
    let open = store.add(EntryDraft::task("Open")).unwrap();
    let done = store.add(EntryDraft::task("Done")).unwrap();
    let note = store.add(EntryDraft::note("Note")).unwrap();
    let old = store.add(EntryDraft::note("Old")).unwrap();
    store.toggle_complete(&done.id, None).unwrap();
    store.toggle_archive(&old.id).unwrap();
    let before = store.entries().to_vec();

    for (dragged, target) in [
        (&open.id, &done.id),
        (&done.id, &open.id),
        (&open.id, &note.id),
        (&note.id, &old.id),
        (&old.id, &note.id),
    ] {
        assert!(!store.reorder(dragged, target).unwrap());
    }
    assert_eq!(store.entries(), before.as_slice());
}
