use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::MedicationStore;
use crate::errors::AppResult;
use crate::models::medication::Medication;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{fmt_concentration, fmt_dose_range, fmt_num};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { name } = cmd {
        let store = MedicationStore::new(cfg.database.clone());
        let meds = filter_by_name(store.list()?, name.as_deref());

        if meds.is_empty() {
            info("No medications found.");
            return Ok(());
        }

        header("💊 Medication catalog");
        print!("{}", render(&meds));
        println!("\n{} medication(s)", meds.len());
    }

    Ok(())
}

fn filter_by_name(meds: Vec<Medication>, needle: Option<&str>) -> Vec<Medication> {
    match needle {
        Some(n) => {
            let n = n.to_lowercase();
            meds.into_iter()
                .filter(|m| m.name.to_lowercase().contains(&n))
                .collect()
        }
        None => meds,
    }
}

fn render(meds: &[Medication]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Name", 22),
        Column::new("Type", 14),
        Column::new("Concentration", 30),
        Column::new("Dose range", 22),
        Column::new("Package", 10),
    ]);

    for m in meds {
        table.add_row(vec![
            m.id.to_string(),
            m.name.clone(),
            m.kind.clone(),
            fmt_concentration(m.concentration_mg, m.concentration_ml),
            fmt_dose_range(m.min_dose_mg_per_kg_day, m.max_dose_mg_per_kg_day),
            format!("{} ml", fmt_num(m.package_volume_ml)),
        ]);
    }

    table.render('-')
}
