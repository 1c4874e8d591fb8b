use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One medication formulation as stored in the `medications` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,                     // ⇔ medications.id (AUTOINCREMENT)
    pub name: String,                // ⇔ medications.name
    pub kind: String,                // ⇔ medications.kind (free text)
    pub concentration_mg: f64,       // mg of active ingredient...
    pub concentration_ml: f64,       // ...in this many ml
    pub min_dose_mg_per_kg_day: f64, // ⇔ medications.min_dose_mg_per_kg_day
    pub max_dose_mg_per_kg_day: f64, // ⇔ medications.max_dose_mg_per_kg_day
    pub package_volume_ml: f64,      // informational only
}

/// Field set of a medication without its id.
/// Used both for inserts and for full-replace updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMedication {
    pub name: String,
    pub kind: String,
    pub concentration_mg: f64,
    pub concentration_ml: f64,
    pub min_dose_mg_per_kg_day: f64,
    pub max_dose_mg_per_kg_day: f64,
    pub package_volume_ml: f64,
}

impl Medication {
    /// Strength of the formulation in mg/ml.
    pub fn strength(&self) -> f64 {
        self.concentration_mg / self.concentration_ml
    }

    /// Attach an id to a field set.
    pub fn from_new(id: i64, data: NewMedication) -> Self {
        Self {
            id,
            name: data.name,
            kind: data.kind,
            concentration_mg: data.concentration_mg,
            concentration_ml: data.concentration_ml,
            min_dose_mg_per_kg_day: data.min_dose_mg_per_kg_day,
            max_dose_mg_per_kg_day: data.max_dose_mg_per_kg_day,
            package_volume_ml: data.package_volume_ml,
        }
    }

    /// Strip the id, e.g. to pre-fill an update.
    pub fn to_new(&self) -> NewMedication {
        NewMedication {
            name: self.name.clone(),
            kind: self.kind.clone(),
            concentration_mg: self.concentration_mg,
            concentration_ml: self.concentration_ml,
            min_dose_mg_per_kg_day: self.min_dose_mg_per_kg_day,
            max_dose_mg_per_kg_day: self.max_dose_mg_per_kg_day,
            package_volume_ml: self.package_volume_ml,
        }
    }
}

impl NewMedication {
    /// Check the write-time invariants of a record.
    ///
    /// - both concentration values must be finite and > 0
    /// - dose limits and package volume must be finite and >= 0
    ///
    /// `min <= max` is not checked.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "medication name must not be empty".into(),
            ));
        }

        require_positive("concentration_mg", self.concentration_mg)?;
        require_positive("concentration_ml", self.concentration_ml)?;
        require_non_negative("min_dose_mg_per_kg_day", self.min_dose_mg_per_kg_day)?;
        require_non_negative("max_dose_mg_per_kg_day", self.max_dose_mg_per_kg_day)?;
        require_non_negative("package_volume_ml", self.package_volume_ml)?;

        Ok(())
    }
}

pub(crate) fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{field} must be a positive number (got {value})"
        )))
    }
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{field} must be zero or a positive number (got {value})"
        )))
    }
}
