//! End-to-end tests of the service over the file backend.

use taskpad_core::{
    FileBackend, PersistedStore, TaskFilter, TaskService, Theme, ThemeKey, STORAGE_KEY,
};

fn service_in(dir: &std::path::Path) -> TaskService<FileBackend> {
    TaskService::with_backend(FileBackend::new(dir))
}

#[test]
fn state_survives_a_service_restart() {
    let dir = tempfile::tempdir().unwrap();

    let service = service_in(dir.path());
    let kept = service.add("water the plants").unwrap();
    let done = service.add("file taxes").unwrap();
    service.toggle(done.id).unwrap();
    drop(service);

    let reopened = service_in(dir.path());
    let items = reopened.list();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], kept);
    assert_eq!(items[1].id, done.id);
    assert!(items[1].completed);

    assert_eq!(reopened.list_filtered(TaskFilter::Active).len(), 1);
}

#[test]
fn corrupt_file_on_disk_recovers_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{STORAGE_KEY}.json")), "not-json").unwrap();

    let service = service_in(dir.path());
    assert!(service.list().is_empty());
    assert_eq!(service.store().get::<ThemeKey>(), Theme::Device);

    // The first write replaces the corrupt record with a valid one.
    service.add("fresh start").unwrap();
    let reopened = service_in(dir.path());
    assert_eq!(reopened.list().len(), 1);
    assert_eq!(reopened.list()[0].text, "fresh start");
}

#[test]
fn theme_and_items_share_one_record_without_clobbering() {
    let dir = tempfile::tempdir().unwrap();

    let store = PersistedStore::new(FileBackend::new(dir.path()));
    store.set::<ThemeKey>(Theme::Dark).unwrap();

    let service = service_in(dir.path());
    service.add("task").unwrap();

    // The service's rewrite of `items` carried the theme along.
    let store = PersistedStore::new(FileBackend::new(dir.path()));
    assert_eq!(store.get::<ThemeKey>(), Theme::Dark);
    assert_eq!(service.list().len(), 1);
}

#[test]
fn clear_completed_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    let service = service_in(dir.path());
    service.add("active").unwrap();
    let done = service.add("done").unwrap();
    service.toggle(done.id).unwrap();
    assert_eq!(service.clear_completed().unwrap(), 1);

    let reopened = service_in(dir.path());
    let items = reopened.list();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "active");
}
