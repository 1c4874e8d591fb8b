//! Medication catalog persistence.
//!
//! `MedicationStore` only remembers the database path: every operation
//! opens its own connection, runs its statement(s) and drops the
//! connection before returning. No state survives between calls.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::medication::{Medication, NewMedication};
use crate::utils::path::ensure_parent_dir;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, name, kind, concentration_mg, concentration_ml,
        min_dose_mg_per_kg_day, max_dose_mg_per_kg_day, package_volume_ml
     FROM medications";

#[derive(Debug, Clone)]
pub struct MedicationStore {
    path: String,
}

pub fn map_row(row: &Row) -> Result<Medication> {
    Ok(Medication {
        id: row.get("id")?,
        name: row.get("name")?,
        kind: row.get("kind")?,
        concentration_mg: row.get("concentration_mg")?,
        concentration_ml: row.get("concentration_ml")?,
        min_dose_mg_per_kg_day: row.get("min_dose_mg_per_kg_day")?,
        max_dose_mg_per_kg_day: row.get("max_dose_mg_per_kg_day")?,
        package_volume_ml: row.get("package_volume_ml")?,
    })
}

impl MedicationStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fresh connection, closed when the caller drops it.
    fn open(&self) -> AppResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Make sure the schema exists. Safe to call on every start.
    /// No CREATE TABLE here: the schema is owned by the migration engine.
    pub fn initialize(&self) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;
        let conn = self.open()?;
        run_pending_migrations(&conn)
    }

    /// Insert a new record and return its id.
    pub fn create(&self, med: &NewMedication) -> AppResult<i64> {
        med.validate()?;

        let conn = self.open()?;
        conn.execute(
            "INSERT INTO medications (name, kind, concentration_mg, concentration_ml,
                                      min_dose_mg_per_kg_day, max_dose_mg_per_kg_day, package_volume_ml)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                med.name,
                med.kind,
                med.concentration_mg,
                med.concentration_ml,
                med.min_dose_mg_per_kg_day,
                med.max_dose_mg_per_kg_day,
                med.package_volume_ml,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// All records in insertion (id) order.
    pub fn list(&self) -> AppResult<Vec<Medication>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Medication>> {
        let conn = self.open()?;
        let med = conn
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id], map_row)
            .optional()?;
        Ok(med)
    }

    /// All records whose name matches exactly, first inserted first.
    pub fn find_by_name(&self, name: &str) -> AppResult<Vec<Medication>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE name = ?1 ORDER BY id ASC"))?;

        let rows = stmt.query_map([name], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Replace every field of the record `id`.
    ///
    /// Returns the number of rows touched: 0 when `id` does not exist,
    /// which is not treated as an error.
    pub fn update(&self, id: i64, med: &NewMedication) -> AppResult<usize> {
        med.validate()?;

        let conn = self.open()?;
        let changed = conn.execute(
            "UPDATE medications
             SET name = ?1, kind = ?2, concentration_mg = ?3, concentration_ml = ?4,
                 min_dose_mg_per_kg_day = ?5, max_dose_mg_per_kg_day = ?6, package_volume_ml = ?7
             WHERE id = ?8",
            params![
                med.name,
                med.kind,
                med.concentration_mg,
                med.concentration_ml,
                med.min_dose_mg_per_kg_day,
                med.max_dose_mg_per_kg_day,
                med.package_volume_ml,
                id,
            ],
        )?;
        Ok(changed)
    }

    /// Remove the record `id`. Returns 0 (no error) when it does not exist.
    pub fn delete(&self, id: i64) -> AppResult<usize> {
        let conn = self.open()?;
        let removed = conn.execute("DELETE FROM medications WHERE id = ?1", [id])?;
        Ok(removed)
    }
}
