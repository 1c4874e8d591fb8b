use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, pdd, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    pdd()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("export completed: 2 medication(s)"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    let header = lines.next().expect("header row");
    assert_eq!(
        header,
        "id,name,kind,concentration_mg,concentration_ml,min_dose_mg_per_kg_day,max_dose_mg_per_kg_day,package_volume_ml"
    );

    let first = lines.next().expect("first row");
    assert!(first.starts_with("1,Paracetamol,Suspension,160"));
    assert_eq!(lines.count(), 1);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    pdd()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = value.as_array().expect("json array");

    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Paracetamol");
    assert_eq!(arr[0]["concentration_mg"], 160.0);
    assert_eq!(arr[1]["name"], "Ibuprofen");
    assert_eq!(arr[1]["max_dose_mg_per_kg_day"], 30.0);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_no_force");
    let out = temp_out("export_no_force", "json");
    init_db_with_data(&db_path);

    fs::write(&out, "keep me").expect("pre-existing file");

    pdd()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    pdd()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).expect("read").contains("Paracetamol"));
}

#[test]
fn test_export_csv_empty_catalog_has_header() {
    let db_path = setup_test_db("export_csv_empty");
    let out = temp_out("export_csv_empty", "csv");
    init_db(&db_path);

    pdd()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("export completed: 0 medication(s)"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next().expect("header row"),
        "id,name,kind,concentration_mg,concentration_ml,min_dose_mg_per_kg_day,max_dose_mg_per_kg_day,package_volume_ml"
    );
    assert_eq!(lines.count(), 0);
}
