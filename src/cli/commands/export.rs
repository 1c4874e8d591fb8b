use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::MedicationStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = MedicationStore::new(cfg.database.clone());
        ExportLogic::export(&store, *format, file, *force)?;
    }

    Ok(())
}
