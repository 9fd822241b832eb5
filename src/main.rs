use colored::Colorize;
use tracing::warn;

use pomo::error::PomoError;
use pomo::identity::SystemIdentity;
use pomo::signals::ShutdownFlag;
use pomo::{logging, tui, Config};

fn main() {
    match run() {
        Ok(()) => {}
        Err(e @ PomoError::TerminalTooSmall { .. }) => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), PomoError> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config.logging.filter) {
        eprintln!("{}: {e:#}", "warning".yellow().bold());
    }
    if let Some(error) = config_error {
        warn!(%error, "failed to load config, using defaults");
    }

    tui::check_size()?;

    let shutdown = ShutdownFlag::register()?;
    let identity = SystemIdentity::detect();

    tui::run(&config, &identity, &shutdown)
}
