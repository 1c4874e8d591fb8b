use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::Selector;
use crate::core::dose::{DoseLogic, Prescription};
use crate::db::MedicationStore;
use crate::errors::{AppError, AppResult};
use crate::models::dosing::describe_schedule;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, fmt_concentration, fmt_ml, fmt_num};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dose {
        weight,
        med,
        id,
        doses,
    } = cmd
    {
        let selector = match (id, med) {
            (Some(id), _) => Selector::Id(*id),
            (None, Some(name)) => Selector::Name(name.clone()),
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "select a medication with --med or --id".into(),
                ));
            }
        };

        let doses_per_day = doses.unwrap_or(cfg.default_doses_per_day);

        let store = MedicationStore::new(cfg.database.clone());
        let rx = DoseLogic::prescribe(&store, &selector, *weight, doses_per_day)?;

        print_prescription(&rx, cfg.decimals);
    }

    Ok(())
}

fn print_prescription(rx: &Prescription, decimals: usize) {
    let m = &rx.medication;
    let (max_ml, min_ml) = rx.volumes.as_pair();

    header("🧾 Prescription");
    println!("   Medication : {} (id {})", m.name, m.id);
    println!(
        "   Strength   : {}",
        fmt_concentration(m.concentration_mg, m.concentration_ml)
    );
    println!("   Weight     : {} kg", fmt_num(rx.weight_kg));
    println!("   Schedule   : {}", describe_schedule(rx.doses_per_day));
    println!();
    println!(
        "💊 Maximum dose per administration: {}",
        bold(&fmt_ml(max_ml, decimals))
    );
    println!(
        "💊 Minimum dose per administration: {}",
        bold(&fmt_ml(min_ml, decimals))
    );
}
