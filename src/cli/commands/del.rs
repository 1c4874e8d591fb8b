use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::db::MedicationStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = MedicationStore::new(cfg.database.clone());

        let Some(med) = store.get(*id)? else {
            warning(format!("No medication with id {}: nothing deleted.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete medication #{} '{}'? This action is irreversible.",
                med.id, med.name
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        match CatalogLogic::delete(&store, *id)? {
            Some(removed) => success(format!("Medication '{}' deleted.", removed.name)),
            None => warning(format!("No medication with id {}: nothing deleted.", id)),
        }
    }

    Ok(())
}
