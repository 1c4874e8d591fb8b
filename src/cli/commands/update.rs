use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::db::MedicationStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update { id, patch } = cmd {
        let store = MedicationStore::new(cfg.database.clone());

        //
        // 1. Pre-fill from the stored record
        //
        let Some(current) = store.get(*id)? else {
            warning(format!("No medication with id {}: nothing updated.", id));
            return Ok(());
        };

        if patch.is_empty() {
            info("No field given: nothing to update.");
            return Ok(());
        }

        //
        // 2. Full replace with the merged field set
        //
        let updated = patch.apply(current.to_new());

        if CatalogLogic::update(&store, *id, &updated)? {
            success(format!("Medication '{}' updated.", updated.name));
        } else {
            // rimosso nel frattempo
            warning(format!("No medication with id {}: nothing updated.", id));
        }
    }

    Ok(())
}
