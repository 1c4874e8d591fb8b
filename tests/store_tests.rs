use pedidose::db::MedicationStore;
use pedidose::errors::AppError;
use pedidose::models::medication::NewMedication;

mod common;
use common::{ibuprofen, paracetamol, setup_store};

#[test]
fn test_create_then_list_returns_record_with_new_id() {
    let store = setup_store("store_create_list");

    let id = store.create(&paracetamol()).expect("create");
    let meds = store.list().expect("list");

    assert_eq!(meds.len(), 1);
    assert_eq!(meds[0].id, id);
    assert_eq!(meds[0].to_new(), paracetamol());
}

#[test]
fn test_ids_are_unique_even_for_duplicate_names() {
    let store = setup_store("store_duplicate_names");

    let a = store.create(&paracetamol()).expect("create a");
    let b = store.create(&paracetamol()).expect("create b");
    assert_ne!(a, b);

    let meds = store.list().expect("list");
    assert_eq!(meds.len(), 2);
    assert!(meds.iter().all(|m| m.name == "Paracetamol"));
}

#[test]
fn test_list_keeps_insertion_order() {
    let store = setup_store("store_order");

    store.create(&ibuprofen()).expect("create");
    store.create(&paracetamol()).expect("create");

    let names: Vec<String> = store
        .list()
        .expect("list")
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Ibuprofen", "Paracetamol"]);
}

#[test]
fn test_update_replaces_every_field() {
    let store = setup_store("store_update");

    let id = store.create(&paracetamol()).expect("create");
    let other_id = store.create(&ibuprofen()).expect("create");

    let replacement = NewMedication {
        name: "Paracetamol Drops".to_string(),
        kind: "Drops".to_string(),
        concentration_mg: 200.0,
        concentration_ml: 1.0,
        min_dose_mg_per_kg_day: 40.0,
        max_dose_mg_per_kg_day: 60.0,
        package_volume_ml: 15.0,
    };

    let changed = store.update(id, &replacement).expect("update");
    assert_eq!(changed, 1);

    let updated = store.get(id).expect("get").expect("record still there");
    assert_eq!(updated.to_new(), replacement);

    // the other record is untouched
    let other = store.get(other_id).expect("get").expect("other record");
    assert_eq!(other.to_new(), ibuprofen());
}

#[test]
fn test_update_missing_id_is_a_silent_noop() {
    let store = setup_store("store_update_missing");

    store.create(&paracetamol()).expect("create");
    let before = store.list().expect("list");

    let changed = store.update(9999, &ibuprofen()).expect("update must not fail");
    assert_eq!(changed, 0);

    assert_eq!(store.list().expect("list"), before);
}

#[test]
fn test_delete_removes_record() {
    let store = setup_store("store_delete");

    let id = store.create(&paracetamol()).expect("create");
    let keep = store.create(&ibuprofen()).expect("create");

    assert_eq!(store.delete(id).expect("delete"), 1);

    let meds = store.list().expect("list");
    assert_eq!(meds.len(), 1);
    assert_eq!(meds[0].id, keep);
    assert!(store.get(id).expect("get").is_none());
}

#[test]
fn test_delete_missing_id_is_a_silent_noop() {
    let store = setup_store("store_delete_missing");

    store.create(&paracetamol()).expect("create");
    let before = store.list().expect("list");

    assert_eq!(store.delete(4242).expect("delete must not fail"), 0);
    assert_eq!(store.list().expect("list"), before);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let store = setup_store("store_no_reuse");

    let first = store.create(&paracetamol()).expect("create");
    store.delete(first).expect("delete");
    let second = store.create(&paracetamol()).expect("create");

    assert!(second > first);
}

#[test]
fn test_find_by_name_returns_first_inserted_first() {
    let store = setup_store("store_find_by_name");

    let first = store.create(&paracetamol()).expect("create");
    store.create(&ibuprofen()).expect("create");
    let second = store.create(&paracetamol()).expect("create");

    let found = store.find_by_name("Paracetamol").expect("find");
    let ids: Vec<i64> = found.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first, second]);

    assert!(store.find_by_name("Amoxicillin").expect("find").is_empty());
}

#[test]
fn test_create_rejects_zero_concentration() {
    let store = setup_store("store_reject_zero");

    let mut bad = paracetamol();
    bad.concentration_ml = 0.0;

    let err = store.create(&bad).expect_err("zero ml must be rejected");
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(store.list().expect("list").is_empty());
}

#[test]
fn test_update_rejects_invalid_record_and_keeps_old_one() {
    let store = setup_store("store_update_invalid");

    let id = store.create(&paracetamol()).expect("create");

    let mut bad = paracetamol();
    bad.concentration_mg = -5.0;

    assert!(matches!(
        store.update(id, &bad),
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(store.get(id).expect("get").expect("record").to_new(), paracetamol());
}

#[test]
fn test_min_greater_than_max_is_accepted() {
    let store = setup_store("store_min_gt_max");

    let mut odd = paracetamol();
    odd.min_dose_mg_per_kg_day = 50.0;
    odd.max_dose_mg_per_kg_day = 10.0;

    store.create(&odd).expect("caller input is trusted");
}

#[test]
fn test_initialize_is_idempotent() {
    let store = setup_store("store_init_twice");

    store.create(&paracetamol()).expect("create");
    store.initialize().expect("second initialize");
    store.initialize().expect("third initialize");

    assert_eq!(store.list().expect("list").len(), 1);
}

#[test]
fn test_handles_on_same_file_see_each_other_writes() {
    let writer = setup_store("store_two_handles");
    let reader = MedicationStore::new(writer.path());

    let id = writer.create(&paracetamol()).expect("create");
    assert_eq!(reader.get(id).expect("get").expect("found").name, "Paracetamol");

    reader.delete(id).expect("delete");
    assert!(writer.list().expect("list").is_empty());
}
