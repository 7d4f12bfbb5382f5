use super::common::*;
use crate::appointments::repository::{AppointmentStore, MemoryAppointmentStore};
use std::sync::Arc;
use std::thread;

#[test]
fn create_returns_the_request_unchanged() {
    let store = MemoryAppointmentStore::new();
    let request = accepted(&payload_with_message());

    let stored = store.create(request.clone()).expect("create succeeds");

    assert_eq!(stored, request);
    assert_eq!(store.list().expect("list succeeds"), vec![request]);
}

#[test]
fn list_preserves_insertion_order() {
    let store = MemoryAppointmentStore::new();
    let first = accepted(&valid_payload());
    let second = accepted(&payload_with_message());

    store.create(first.clone()).expect("first create");
    store.create(second.clone()).expect("second create");

    assert_eq!(store.list().expect("list succeeds"), vec![first, second]);
}

#[test]
fn duplicates_are_stored_separately() {
    let store = MemoryAppointmentStore::new();
    let request = accepted(&valid_payload());

    store.create(request.clone()).expect("first create");
    store.create(request.clone()).expect("second create");

    let stored = store.list().expect("list succeeds");
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|entry| *entry == request));
}

#[test]
fn list_returns_a_snapshot() {
    let store = MemoryAppointmentStore::new();
    store
        .create(accepted(&valid_payload()))
        .expect("first create");

    let snapshot = store.list().expect("list succeeds");
    store
        .create(accepted(&payload_with_message()))
        .expect("second create");

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.list().expect("list succeeds").len(), 2);
}

#[test]
fn concurrent_creates_are_neither_lost_nor_duplicated() {
    let store = Arc::new(MemoryAppointmentStore::new());
    let request = accepted(&valid_payload());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let request = request.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    store.create(request.clone()).expect("create succeeds");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker finished");
    }

    assert_eq!(store.list().expect("list succeeds").len(), 200);
}

#[test]
fn clones_share_the_same_collection() {
    let store = MemoryAppointmentStore::new();
    let handle = store.clone();

    handle
        .create(accepted(&valid_payload()))
        .expect("create succeeds");

    assert_eq!(store.list().expect("list succeeds").len(), 1);
}
