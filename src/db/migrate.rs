use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Name under which the legacy-table import is recorded in `log`.
const LEGACY_IMPORT_VERSION: &str = "20240601_0001_import_medicamentos";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table with the given name exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `medications` table.
fn create_medications_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS medications (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            name                    TEXT NOT NULL,
            kind                    TEXT NOT NULL DEFAULT '',
            concentration_mg        REAL NOT NULL,
            concentration_ml        REAL NOT NULL,
            min_dose_mg_per_kg_day  REAL NOT NULL DEFAULT 0,
            max_dose_mg_per_kg_day  REAL NOT NULL DEFAULT 0,
            package_volume_ml       REAL NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_medications_name ON medications(name);
        "#,
    )?;
    Ok(())
}

/// Import rows from the legacy `medicamentos` table (Portuguese column
/// names) into `medications`, then drop it.
///
/// Ids are preserved when `medications` is still empty, otherwise new ids
/// are assigned to avoid collisions.
fn import_legacy_medicamentos(conn: &Connection) -> AppResult<usize> {
    if !table_exists(conn, "medicamentos")? {
        return Ok(0); // nessuna tabella legacy → niente da migrare
    }

    warning("Legacy 'medicamentos' table detected, importing into 'medications'...");

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM medications", [], |row| row.get(0))?;

    let insert_sql = if existing == 0 {
        r#"
        INSERT INTO medications (id, name, kind, concentration_mg, concentration_ml,
                                 min_dose_mg_per_kg_day, max_dose_mg_per_kg_day, package_volume_ml)
        SELECT id, IFNULL(nome, ''), IFNULL(tipo, ''), IFNULL(concentracao_mg, 0),
               IFNULL(concentracao_ml, 0), IFNULL(dose_minima_kg_dia, 0),
               IFNULL(dose_maxima_kg_dia, 0), IFNULL(volume_embalagem_ml, 0)
        FROM medicamentos
        ORDER BY id ASC
        "#
    } else {
        r#"
        INSERT INTO medications (name, kind, concentration_mg, concentration_ml,
                                 min_dose_mg_per_kg_day, max_dose_mg_per_kg_day, package_volume_ml)
        SELECT IFNULL(nome, ''), IFNULL(tipo, ''), IFNULL(concentracao_mg, 0),
               IFNULL(concentracao_ml, 0), IFNULL(dose_minima_kg_dia, 0),
               IFNULL(dose_maxima_kg_dia, 0), IFNULL(volume_embalagem_ml, 0)
        FROM medicamentos
        ORDER BY id ASC
        "#
    };

    let tx = conn.unchecked_transaction()?;

    let imported = tx.execute(insert_sql, []).map_err(|e| {
        AppError::Migration(format!("Failed to import legacy medicamentos rows: {}", e))
    })?;

    tx.execute_batch("DROP TABLE medicamentos;")?;

    ttlog(
        &tx,
        "migration_applied",
        LEGACY_IMPORT_VERSION,
        &format!("Imported {} row(s) from legacy medicamentos table", imported),
    )?;

    tx.commit()?;

    success(format!(
        "Migration applied: {} → imported {} medication(s)",
        LEGACY_IMPORT_VERSION, imported
    ));

    Ok(imported)
}

/// Public entry point: run all pending migrations.
///
/// Invocata da MedicationStore::initialize() e da `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create medications table if missing
    if !table_exists(conn, "medications")? {
        create_medications_table(conn)?;
        ttlog(
            conn,
            "migration_applied",
            "create_medications",
            "Created medications table",
        )?;
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_medications_name ON medications(name);",
        )?;
    }

    // 3) Legacy data written by the first version of the tool
    import_legacy_medicamentos(conn)?;

    Ok(())
}
