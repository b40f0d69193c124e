//! CLI entrypoint for Scrum Poker
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use scrum_poker_application::{RunSessionUseCase, SessionParams};
use scrum_poker_domain::parse_backlog;
use scrum_poker_infrastructure::{
    ConfigLoader, FileConfig, FileSnapshotStore, JsonlSessionLogger,
};
use scrum_poker_presentation::{Cli, Command, ConsoleFormatter, PlayExit, PlayRepl};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let (errors, warnings): (Vec<_>, Vec<_>) =
        config.validate().into_iter().partition(|issue| issue.is_error());
    for issue in &warnings {
        warn!("{}", issue.message);
    }
    if let Some(issue) = errors.first() {
        bail!("Invalid configuration: {}", issue.message);
    }

    ConsoleFormatter::set_color(config.output.color && !cli.no_color);
    let params = config.to_session_params();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Play {
            backlog,
            players,
            mode,
            snapshot,
        } => {
            let bytes = std::fs::read(&backlog)
                .with_context(|| format!("Failed to read backlog {}", backlog.display()))?;
            let features = parse_backlog(&bytes)
                .with_context(|| format!("Invalid backlog {}", backlog.display()))?;

            let mut use_case = build_use_case(
                params,
                &config,
                cli.event_log,
                snapshot.or_else(|| config.session.snapshot_path()),
            );
            use_case.start_with_names(players.as_slice(), mode, features)?;
            info!("Starting Scrum Poker");
            play(use_case)
        }
        Command::Resume { snapshot } => {
            let path = snapshot
                .or_else(|| config.session.snapshot_path())
                .context("No snapshot file given and none configured")?;

            let mut use_case = build_use_case(params, &config, cli.event_log, Some(path.clone()));
            use_case
                .load()
                .with_context(|| format!("Cannot resume from {}", path.display()))?;
            play(use_case)
        }
        Command::Export { snapshot, out } => {
            let use_case = restore_from(params, &snapshot)?;
            let json = use_case.export_results()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Results written to {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&json)?;
                    writeln!(stdout)?;
                }
            }
            Ok(())
        }
        Command::Summary { snapshot } => {
            let use_case = restore_from(params, &snapshot)?;
            print!("{}", ConsoleFormatter::summary(use_case.session()));
            Ok(())
        }
    }
}

// === Dependency Injection ===
fn build_use_case(
    params: SessionParams,
    config: &FileConfig,
    event_log: Option<PathBuf>,
    snapshot: Option<PathBuf>,
) -> RunSessionUseCase {
    let mut use_case = RunSessionUseCase::new(params);

    if let Some(path) = event_log.or_else(|| config.session.event_log_path())
        && let Some(logger) = JsonlSessionLogger::new(&path)
    {
        info!("Session events logged to {}", logger.path().display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    if let Some(path) = snapshot {
        use_case = use_case.with_store(Box::new(FileSnapshotStore::new(path)));
    }

    use_case
}

fn restore_from(params: SessionParams, path: &Path) -> Result<RunSessionUseCase> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let mut use_case = RunSessionUseCase::new(params);
    use_case
        .restore(&bytes)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;
    Ok(use_case)
}

fn play(use_case: RunSessionUseCase) -> Result<()> {
    let mut repl = PlayRepl::new(use_case);
    let exit = repl.run()?;
    let use_case = repl.into_use_case();

    match exit {
        PlayExit::Finished | PlayExit::CoffeeBreak => {}
        PlayExit::Quit => match use_case.save() {
            Ok(()) => println!("Progress saved. Continue with `scrum-poker resume`."),
            Err(e) => warn!("Session not saved: {}", e),
        },
    }

    Ok(())
}
