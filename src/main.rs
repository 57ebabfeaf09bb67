use anyhow::Context;
use clap::Parser;

use tapcounter::cli::{Cli, Command};
use tapcounter::clipboard::{ClipboardHandler, ClipboardSink};
use tapcounter::commands;
use tapcounter::config::Config;
use tapcounter::logging::init_tracing;
use tapcounter::model::SystemClock;
use tapcounter::session::CounterSession;
use tapcounter::store::{FilePreferences, SnapshotStore};
use tapcounter::ui::app::App;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let store_path = config.store_path(cli.store.as_deref());
    tracing::info!("Using store {}", store_path.display());
    let mut session = CounterSession::open(SnapshotStore::new(FilePreferences::open(store_path)));

    let mut stdout = std::io::stdout().lock();
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            drop(stdout);
            run_ui(session, &config)?;
        }
        Command::Tap => commands::tap(&mut session, &SystemClock, &mut stdout)?,
        Command::Minus { yes } => commands::minus(&mut session, yes, &mut stdout)?,
        Command::Clear { yes } => commands::clear(&mut session, yes, &mut stdout)?,
        Command::Show { json } => commands::show(&session, json, &mut stdout)?,
        Command::Copy => {
            let mut clipboard = ClipboardHandler::new()?;
            commands::copy(
                &session,
                &mut clipboard,
                config.history.copy_format,
                &mut stdout,
            )?;
        }
    }
    Ok(())
}

fn run_ui(session: CounterSession, config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(session, Box::new(SystemClock))
        .with_copy_format(config.history.copy_format)
        .with_status_timeout(config.status_timeout());

    match ClipboardHandler::new() {
        Ok(handler) => {
            app = app.with_clipboard(Box::new(handler) as Box<dyn ClipboardSink>);
        }
        Err(err) => tracing::warn!("{}", err),
    }

    tapcounter::ui::run(app, config.tick_rate()).context("Terminal UI failed")?;
    Ok(())
}
