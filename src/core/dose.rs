use crate::core::calculator::{DosageCalculator, DoseVolumes};
use crate::core::catalog::{CatalogLogic, Selector};
use crate::db::MedicationStore;
use crate::errors::AppResult;
use crate::models::medication::Medication;

/// Result of a dose request, ready to be printed.
#[derive(Debug, Clone)]
pub struct Prescription {
    pub medication: Medication,
    pub weight_kg: f64,
    pub doses_per_day: u32,
    pub volumes: DoseVolumes,
}

pub struct DoseLogic;

impl DoseLogic {
    pub fn prescribe(
        store: &MedicationStore,
        selector: &Selector,
        weight_kg: f64,
        doses_per_day: u32,
    ) -> AppResult<Prescription> {
        let medication = CatalogLogic::select(store, selector)?;
        let volumes = DosageCalculator::compute(weight_kg, &medication, f64::from(doses_per_day))?;

        Ok(Prescription {
            medication,
            weight_kg,
            doses_per_day,
            volumes,
        })
    }
}
