use crate::export::ExportFormat;
use crate::models::medication::NewMedication;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for pedidose
/// CLI application to manage a pediatric medication catalog with SQLite
#[derive(Parser)]
#[command(
    name = "pedidose",
    version = env!("CARGO_PKG_VERSION"),
    about = "A pediatric dose calculator: keep a medication catalog in SQLite and compute ml per administration",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All fields of a medication, as required by `add`.
#[derive(Args, Debug, Clone)]
pub struct MedicationArgs {
    /// Display name (not required to be unique)
    #[arg(long)]
    pub name: String,

    /// Free-text category (syrup, drops, suspension, ...)
    #[arg(long, default_value = "")]
    pub kind: String,

    #[arg(long = "mg", help = "Milligrams of active ingredient in the reference volume")]
    pub concentration_mg: f64,

    #[arg(long = "ml", help = "Reference volume in ml for --mg")]
    pub concentration_ml: f64,

    #[arg(long = "min", help = "Minimum daily dose (mg/kg/day)")]
    pub min_dose: f64,

    #[arg(long = "max", help = "Maximum daily dose (mg/kg/day)")]
    pub max_dose: f64,

    #[arg(long = "package", default_value_t = 0.0, help = "Package volume in ml")]
    pub package_volume: f64,
}

impl MedicationArgs {
    pub fn to_new(&self) -> NewMedication {
        NewMedication {
            name: self.name.clone(),
            kind: self.kind.clone(),
            concentration_mg: self.concentration_mg,
            concentration_ml: self.concentration_ml,
            min_dose_mg_per_kg_day: self.min_dose,
            max_dose_mg_per_kg_day: self.max_dose,
            package_volume_ml: self.package_volume,
        }
    }
}

/// Field overrides for `update`: omitted fields keep their stored value.
#[derive(Args, Debug, Clone, Default)]
pub struct MedicationPatch {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub kind: Option<String>,

    #[arg(long = "mg")]
    pub concentration_mg: Option<f64>,

    #[arg(long = "ml")]
    pub concentration_ml: Option<f64>,

    #[arg(long = "min")]
    pub min_dose: Option<f64>,

    #[arg(long = "max")]
    pub max_dose: Option<f64>,

    #[arg(long = "package")]
    pub package_volume: Option<f64>,
}

impl MedicationPatch {
    /// Overlay the given fields on top of `base`, producing the full
    /// replacement record.
    pub fn apply(&self, base: NewMedication) -> NewMedication {
        NewMedication {
            name: self.name.clone().unwrap_or(base.name),
            kind: self.kind.clone().unwrap_or(base.kind),
            concentration_mg: self.concentration_mg.unwrap_or(base.concentration_mg),
            concentration_ml: self.concentration_ml.unwrap_or(base.concentration_ml),
            min_dose_mg_per_kg_day: self.min_dose.unwrap_or(base.min_dose_mg_per_kg_day),
            max_dose_mg_per_kg_day: self.max_dose.unwrap_or(base.max_dose_mg_per_kg_day),
            package_volume_ml: self.package_volume.unwrap_or(base.package_volume_ml),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.concentration_mg.is_none()
            && self.concentration_ml.is_none()
            && self.min_dose.is_none()
            && self.max_dose.is_none()
            && self.package_volume.is_none()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a medication to the catalog
    Add {
        #[command(flatten)]
        fields: MedicationArgs,
    },

    /// List the medication catalog
    List {
        #[arg(long, help = "Only medications whose name contains this text")]
        name: Option<String>,
    },

    /// Update a medication (omitted fields keep their current value)
    Update {
        /// Medication id (see `list`)
        id: i64,

        #[command(flatten)]
        patch: MedicationPatch,
    },

    /// Delete a medication by id
    Del {
        /// Medication id (see `list`)
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Compute the volume per administration for a child
    Dose {
        #[arg(long, short = 'w', help = "Weight of the child in kg")]
        weight: f64,

        #[arg(
            long = "med",
            short = 'm',
            conflicts_with = "id",
            required_unless_present = "id",
            help = "Medication name (first match if several share it)"
        )]
        med: Option<String>,

        #[arg(long = "id", help = "Medication id")]
        id: Option<i64>,

        #[arg(
            long = "doses",
            short = 'd',
            help = "Doses per day: 4 (6h), 3 (8h), 2 (12h), 1 (24h). Default from config"
        )]
        doses: Option<u32>,
    },

    /// Export the medication catalog
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
