use pedidose::db::MedicationStore;
use rusqlite::Connection;

mod common;
use common::{paracetamol, setup_test_db};

/// Schema written by the first version of the tool
fn create_legacy_db(path: &str) {
    let conn = Connection::open(path).expect("open legacy db");
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS medicamentos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT,
            tipo TEXT,
            concentracao_mg REAL,
            concentracao_ml REAL,
            dose_minima_kg_dia REAL,
            dose_maxima_kg_dia REAL,
            volume_embalagem_ml REAL
        );

        INSERT INTO medicamentos (id, nome, tipo, concentracao_mg, concentracao_ml,
                                  dose_minima_kg_dia, dose_maxima_kg_dia, volume_embalagem_ml)
        VALUES (3, 'Dipirona', 'Gotas', 500, 1, 50, 100, 20),
               (7, 'Amoxicilina', 'Suspensão', 250, 5, 25, 50, 150);
        "#,
    )
    .expect("create legacy table");
}

fn legacy_table_exists(path: &str) -> bool {
    let conn = Connection::open(path).expect("open db");
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='medicamentos'",
            [],
            |row| row.get(0),
        )
        .expect("query sqlite_master");
    n > 0
}

#[test]
fn test_fresh_database_gets_medications_and_log_tables() {
    let db_path = setup_test_db("migrate_fresh");
    MedicationStore::new(db_path.clone())
        .initialize()
        .expect("initialize");

    let conn = Connection::open(&db_path).expect("open db");
    for table in ["medications", "log"] {
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("query");
        assert_eq!(n, 1, "table {table} should exist");
    }
}

#[test]
fn test_legacy_rows_are_imported_with_their_ids() {
    let db_path = setup_test_db("migrate_legacy_ids");
    create_legacy_db(&db_path);

    let store = MedicationStore::new(db_path.clone());
    store.initialize().expect("initialize");

    let meds = store.list().expect("list");
    assert_eq!(meds.len(), 2);

    assert_eq!(meds[0].id, 3);
    assert_eq!(meds[0].name, "Dipirona");
    assert_eq!(meds[0].kind, "Gotas");
    assert_eq!(meds[0].concentration_mg, 500.0);
    assert_eq!(meds[0].concentration_ml, 1.0);
    assert_eq!(meds[0].min_dose_mg_per_kg_day, 50.0);
    assert_eq!(meds[0].max_dose_mg_per_kg_day, 100.0);
    assert_eq!(meds[0].package_volume_ml, 20.0);

    assert_eq!(meds[1].id, 7);
    assert_eq!(meds[1].name, "Amoxicilina");

    assert!(!legacy_table_exists(&db_path));

    // new ids continue after the imported ones
    let id = store.create(&paracetamol()).expect("create");
    assert!(id > 7);
}

#[test]
fn test_legacy_import_runs_once_and_is_logged() {
    let db_path = setup_test_db("migrate_legacy_once");
    create_legacy_db(&db_path);

    let store = MedicationStore::new(db_path.clone());
    store.initialize().expect("first initialize");
    store.initialize().expect("second initialize");

    assert_eq!(store.list().expect("list").len(), 2);

    let conn = Connection::open(&db_path).expect("open db");
    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied' AND message LIKE 'Imported 2 row(s)%'",
            [],
            |row| row.get(0),
        )
        .expect("query log");
    assert_eq!(applied, 1);
}

#[test]
fn test_legacy_import_into_non_empty_catalog_assigns_new_ids() {
    let db_path = setup_test_db("migrate_legacy_non_empty");

    let store = MedicationStore::new(db_path.clone());
    store.initialize().expect("initialize");
    let existing = store.create(&paracetamol()).expect("create");

    // an old copy of the tool wrote into the same file afterwards
    create_legacy_db(&db_path);
    store.initialize().expect("initialize with legacy table");

    let meds = store.list().expect("list");
    assert_eq!(meds.len(), 3);
    assert_eq!(meds[0].id, existing);
    assert_eq!(meds[0].name, "Paracetamol");

    let names: Vec<&str> = meds[1..].iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Dipirona", "Amoxicilina"]);
    assert!(!legacy_table_exists(&db_path));
}
