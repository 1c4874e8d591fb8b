use crate::errors::{AppError, AppResult};
use crate::models::medication::Medication;
use csv::Writer;
use std::path::Path;

/// Column order of the CSV export, same as the `Medication` fields.
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "name",
    "kind",
    "concentration_mg",
    "concentration_ml",
    "min_dose_mg_per_kg_day",
    "max_dose_mg_per_kg_day",
    "package_volume_ml",
];

/// Scrive il catalogo in CSV: una riga di intestazione con i nomi dei campi.
pub fn write_csv(path: &Path, meds: &[Medication]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    // serialize() emits the header only with the first record
    if meds.is_empty() {
        wtr.write_record(CSV_HEADER)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    for med in meds {
        wtr.serialize(med)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Scrive il catalogo in JSON formattato.
pub fn write_json(path: &Path, meds: &[Medication]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(meds).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
