use clap::Parser;
use color_eyre::Result;
use timecard::{
    Config, Profile, Store,
    cli::{Cli, Commands},
};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // Load configuration with the determined profile
    // Note: --config option is parsed but not yet used to override config path
    let config = Config::load_with_profile(profile)?;

    // File logging lives next to the entry store; the terminal belongs to
    // the UI, so a logging failure is reported once and the app carries on
    let db_path = config.get_database_path();
    let _logger = db_path.parent().and_then(|dir| {
        timecard::logging::init_logging(dir)
            .map_err(|e| eprintln!("WARNING: file logging unavailable: {}", e))
            .ok()
    });

    // Open the entry store
    let store = Store::new(
        db_path
            .to_str()
            .ok_or_else(|| color_eyre::eyre::eyre!("Database path contains invalid UTF-8"))?,
    )?;

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let app = timecard::tui::App::new(config, store);
            timecard::tui::run_event_loop(app)?;
        }
        Commands::Add {
            project,
            task,
            hours,
            date,
            description,
        } => {
            timecard::cli::handle_add(date, project, task, hours, description, &store)?;
        }
        Commands::List => {
            timecard::cli::handle_list(&config, &store)?;
        }
    }

    Ok(())
}
