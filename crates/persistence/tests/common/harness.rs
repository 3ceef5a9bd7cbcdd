//! Backend-independent CRUD contract.
//!
//! Each function takes a fresh, empty store and panics on the first
//! behavior that deviates from the [`RecordStore`] contract.

use std::sync::Arc;

use carebase_persistence::core::RecordStore;
use carebase_persistence::types::StoredRecord;

use super::fixtures::patient_record;

/// Inserted records read back unchanged.
pub async fn check_insert_and_get<S: RecordStore>(store: &S) {
    let record = patient_record("p1", "Smith");
    store.insert(record.clone()).await.unwrap();

    let read = store.get("Patient", "p1").await.unwrap();
    assert_eq!(read, Some(record));
    assert_eq!(store.count("Patient").await.unwrap(), 1);
}

/// Reads of an absent key return `None`, not an error.
pub async fn check_get_missing<S: RecordStore>(store: &S) {
    assert_eq!(store.get("Patient", "nope").await.unwrap(), None);
    assert_eq!(store.count("Patient").await.unwrap(), 0);
}

/// A second insert under the same key fails and leaves the first payload.
pub async fn check_insert_duplicate<S: RecordStore>(store: &S) {
    store.insert(patient_record("dup", "First")).await.unwrap();

    let err = store
        .insert(patient_record("dup", "Second"))
        .await
        .unwrap_err();
    assert!(err.is_already_exists(), "unexpected error: {err}");

    let read = store.get("Patient", "dup").await.unwrap().unwrap();
    assert_eq!(read, patient_record("dup", "First"));
}

/// `replace` overwrites present records and never creates absent ones.
pub async fn check_replace<S: RecordStore>(store: &S) {
    assert!(!store.replace(patient_record("p1", "Smith")).await.unwrap());
    assert_eq!(store.get("Patient", "p1").await.unwrap(), None);

    store.insert(patient_record("p1", "Smith")).await.unwrap();
    assert!(store.replace(patient_record("p1", "Jones")).await.unwrap());

    let read = store.get("Patient", "p1").await.unwrap().unwrap();
    assert_eq!(read, patient_record("p1", "Jones"));
    assert_eq!(store.count("Patient").await.unwrap(), 1);

    // Scoped by resource type like every other key.
    let other = StoredRecord::new("Practitioner", "p1", "{}");
    assert!(!store.replace(other).await.unwrap());
    assert_eq!(store.count("Practitioner").await.unwrap(), 0);
}

/// A replace racing a delete either lands before it or not at all.
pub async fn check_replace_after_delete<S: RecordStore + 'static>(store: Arc<S>) {
    for round in 0..32 {
        let id = format!("gone-{round}");
        store.insert(patient_record(&id, "Smith")).await.unwrap();

        let deleter = {
            let store = Arc::clone(&store);
            let id = id.clone();
            tokio::spawn(async move { store.delete("Patient", &id).await })
        };
        let replacer = {
            let store = Arc::clone(&store);
            let id = id.clone();
            tokio::spawn(async move { store.replace(patient_record(&id, "Jones")).await })
        };

        assert!(deleter.await.unwrap().unwrap());
        replacer.await.unwrap().unwrap();
        assert_eq!(store.get("Patient", &id).await.unwrap(), None);
    }
}

/// Delete reports whether something was removed, every time.
pub async fn check_delete<S: RecordStore>(store: &S) {
    store.insert(patient_record("p1", "Smith")).await.unwrap();

    assert!(store.delete("Patient", "p1").await.unwrap());
    assert_eq!(store.get("Patient", "p1").await.unwrap(), None);

    assert!(!store.delete("Patient", "p1").await.unwrap());
    assert!(!store.delete("Patient", "p1").await.unwrap());
}

/// Keys are scoped by resource type.
pub async fn check_resource_type_isolation<S: RecordStore>(store: &S) {
    store.insert(patient_record("shared", "Smith")).await.unwrap();
    store
        .insert(StoredRecord::new("Practitioner", "shared", "{}"))
        .await
        .unwrap();

    assert_eq!(store.count("Patient").await.unwrap(), 1);
    assert_eq!(store.count("Practitioner").await.unwrap(), 1);
    assert_eq!(store.count("Observation").await.unwrap(), 0);

    assert!(store.delete("Practitioner", "shared").await.unwrap());
    assert!(store.get("Patient", "shared").await.unwrap().is_some());
}

/// Of many concurrent inserts under one key exactly one succeeds.
pub async fn check_concurrent_insert<S: RecordStore + 'static>(store: Arc<S>) {
    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .insert(patient_record("race", &format!("Writer{i}")))
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(e) => assert!(e.is_already_exists(), "unexpected error: {e}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(store.count("Patient").await.unwrap(), 1);
}

/// The store reports itself healthy.
pub async fn check_health<S: RecordStore>(store: &S) {
    store.health_check().await.unwrap();
}
