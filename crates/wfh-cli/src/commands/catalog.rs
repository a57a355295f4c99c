use clap::Subcommand;
use wfh_core::Catalog;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List all exercises as JSON
    Exercises,
    /// List all routines as JSON
    Routines,
    /// Show a single exercise or routine by id
    Show {
        /// Exercise or routine id, e.g. `chin-tucks` or `neck-fix`
        id: String,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    match action {
        CatalogAction::Exercises => {
            println!("{}", serde_json::to_string_pretty(catalog.exercises())?);
        }
        CatalogAction::Routines => {
            println!("{}", serde_json::to_string_pretty(catalog.routines())?);
        }
        CatalogAction::Show { id } => {
            if let Some(exercise) = catalog.exercise(&id) {
                println!("{}", serde_json::to_string_pretty(exercise)?);
            } else if let Some(routine) = catalog.routine(&id) {
                println!("{}", serde_json::to_string_pretty(routine)?);
            } else {
                return Err(format!("no exercise or routine with id '{id}'").into());
            }
        }
    }
    Ok(())
}
