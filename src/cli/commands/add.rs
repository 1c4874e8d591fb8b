use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::db::MedicationStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let store = MedicationStore::new(cfg.database.clone());
        let med = fields.to_new();

        let id = CatalogLogic::add(&store, &med)?;

        success(format!("Medication '{}' saved (id {}).", med.name, id));
    }

    Ok(())
}
