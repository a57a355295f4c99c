use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wfh-cli", version, about = "WFH Toolkit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the exercise and routine catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Guided session control
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// 21-day challenge progress tracking
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Progress { action } => commands::progress::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
