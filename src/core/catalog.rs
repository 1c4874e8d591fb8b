use crate::db::MedicationStore;
use crate::db::log::ttlog_path;
use crate::errors::{AppError, AppResult};
use crate::models::medication::{Medication, NewMedication};
use crate::ui::messages::warning;

/// How the user picked a medication on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    Id(i64),
    Name(String),
}

pub struct CatalogLogic;

impl CatalogLogic {
    /// Create a record and write an `add` row in the internal log.
    pub fn add(store: &MedicationStore, med: &NewMedication) -> AppResult<i64> {
        let id = store.create(med)?;

        ttlog_path(
            store.path(),
            "add",
            &format!("id={}", id),
            &format!("Added medication '{}'", med.name),
        );

        Ok(id)
    }

    /// Full replace of record `id`. Returns false when `id` does not exist.
    pub fn update(store: &MedicationStore, id: i64, med: &NewMedication) -> AppResult<bool> {
        let changed = store.update(id, med)?;

        if changed > 0 {
            ttlog_path(
                store.path(),
                "edit",
                &format!("id={}", id),
                &format!("Updated medication '{}'", med.name),
            );
        }

        Ok(changed > 0)
    }

    /// Delete record `id`, returning what was removed (None when absent).
    pub fn delete(store: &MedicationStore, id: i64) -> AppResult<Option<Medication>> {
        let existing = store.get(id)?;

        if let Some(med) = &existing {
            store.delete(id)?;
            ttlog_path(
                store.path(),
                "del",
                &format!("id={}", id),
                &format!("Deleted medication '{}'", med.name),
            );
        }

        Ok(existing)
    }

    /// Resolve a selector to a single record.
    ///
    /// Names are not unique: the first inserted record wins and a warning
    /// lists how many others share the name.
    pub fn select(store: &MedicationStore, selector: &Selector) -> AppResult<Medication> {
        match selector {
            Selector::Id(id) => store
                .get(*id)?
                .ok_or_else(|| AppError::MedicationNotFound(format!("id {}", id))),
            Selector::Name(name) => {
                let mut matches = store.find_by_name(name)?;

                if matches.is_empty() {
                    return Err(AppError::MedicationNotFound(format!("'{}'", name)));
                }

                if matches.len() > 1 {
                    warning(format!(
                        "{} medications are named '{}': using id {} (pass --id to choose another).",
                        matches.len(),
                        name,
                        matches[0].id
                    ));
                }

                Ok(matches.remove(0))
            }
        }
    }
}
