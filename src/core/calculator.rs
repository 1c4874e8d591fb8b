//! Dose volume calculation.
//!
//! Pure arithmetic: no database access and no rounding. Rounding for
//! display happens in `utils::formatting`.

use crate::errors::{AppError, AppResult};
use crate::models::medication::{Medication, require_positive};
use serde::Serialize;

/// Volume (ml) to administer at a single dosing event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoseVolumes {
    /// Volume for the maximum daily dose.
    pub max_ml: f64,
    /// Volume for the minimum daily dose.
    pub min_ml: f64,
}

impl DoseVolumes {
    /// `(max, min)`, max first.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.max_ml, self.min_ml)
    }
}

pub struct DosageCalculator;

impl DosageCalculator {
    /// Compute the per-dose volumes for a patient of `weight_kg`.
    ///
    /// strength      = concentration_mg / concentration_ml
    /// volume(limit) = weight_kg * limit / doses_per_day / strength
    ///
    /// Fails with `InvalidInput` when a denominator or the weight is not
    /// a finite positive number, or when the result does not fit in an f64.
    pub fn compute(
        weight_kg: f64,
        medication: &Medication,
        doses_per_day: f64,
    ) -> AppResult<DoseVolumes> {
        require_positive("weight_kg", weight_kg)?;
        require_positive("doses_per_day", doses_per_day)?;
        require_positive("concentration_mg", medication.concentration_mg)?;
        require_positive("concentration_ml", medication.concentration_ml)?;

        if !medication.min_dose_mg_per_kg_day.is_finite()
            || !medication.max_dose_mg_per_kg_day.is_finite()
        {
            return Err(AppError::InvalidInput(format!(
                "dose limits of '{}' are not finite numbers",
                medication.name
            )));
        }

        let strength = medication.strength();
        if !strength.is_finite() || strength <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "strength of '{}' is out of range ({} mg / {} ml)",
                medication.name, medication.concentration_mg, medication.concentration_ml
            )));
        }

        let daily_max_mg = weight_kg * medication.max_dose_mg_per_kg_day;
        let per_dose_max_mg = daily_max_mg / doses_per_day;
        let daily_min_mg = weight_kg * medication.min_dose_mg_per_kg_day;
        let per_dose_min_mg = daily_min_mg / doses_per_day;

        let volumes = DoseVolumes {
            max_ml: per_dose_max_mg / strength,
            min_ml: per_dose_min_mg / strength,
        };

        if !volumes.max_ml.is_finite() || !volumes.min_ml.is_finite() {
            return Err(AppError::InvalidInput(format!(
                "dose volumes for '{}' at {} kg overflow",
                medication.name, weight_kg
            )));
        }

        Ok(volumes)
    }
}
