use crate::db::MedicationStore;
use crate::db::log::ttlog_path;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::{ExportFormat, notify_export_success};
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the whole catalog to `file`. Returns the number of records.
    pub fn export(
        store: &MedicationStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let meds = store.list()?;

        match format {
            ExportFormat::Csv => write_csv(&path, &meds)?,
            ExportFormat::Json => write_json(&path, &meds)?,
        }

        ttlog_path(
            store.path(),
            "export",
            format.as_str(),
            &format!("Exported {} medication(s) to {}", meds.len(), path.display()),
        );

        notify_export_success(&format.as_str().to_uppercase(), &path, meds.len());
        Ok(meds.len())
    }
}
