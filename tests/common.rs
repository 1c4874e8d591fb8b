#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use pedidose::db::MedicationStore;
use pedidose::models::medication::NewMedication;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pdd() -> Command {
    cargo_bin_cmd!("pedidose")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pedidose.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pedidose_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, initialized store on its own database file
pub fn setup_store(name: &str) -> MedicationStore {
    let store = MedicationStore::new(setup_test_db(name));
    store.initialize().expect("initialize store");
    store
}

/// 160 mg / 5 ml, 10–15 mg/kg/day
pub fn paracetamol() -> NewMedication {
    NewMedication {
        name: "Paracetamol".to_string(),
        kind: "Suspension".to_string(),
        concentration_mg: 160.0,
        concentration_ml: 5.0,
        min_dose_mg_per_kg_day: 10.0,
        max_dose_mg_per_kg_day: 15.0,
        package_volume_ml: 100.0,
    }
}

/// 100 mg / 5 ml, 20–30 mg/kg/day
pub fn ibuprofen() -> NewMedication {
    NewMedication {
        name: "Ibuprofen".to_string(),
        kind: "Syrup".to_string(),
        concentration_mg: 100.0,
        concentration_ml: 5.0,
        min_dose_mg_per_kg_day: 20.0,
        max_dose_mg_per_kg_day: 30.0,
        package_volume_ml: 150.0,
    }
}

/// Initialize DB via the CLI (test mode, no config file written)
pub fn init_db(db_path: &str) {
    pdd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add the two sample medications through the CLI
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    pdd()
        .args([
            "--db",
            db_path,
            "add",
            "--name",
            "Paracetamol",
            "--kind",
            "Suspension",
            "--mg",
            "160",
            "--ml",
            "5",
            "--min",
            "10",
            "--max",
            "15",
            "--package",
            "100",
        ])
        .assert()
        .success();

    pdd()
        .args([
            "--db",
            db_path,
            "add",
            "--name",
            "Ibuprofen",
            "--kind",
            "Syrup",
            "--mg",
            "100",
            "--ml",
            "5",
            "--min",
            "20",
            "--max",
            "30",
            "--package",
            "150",
        ])
        .assert()
        .success();
}
