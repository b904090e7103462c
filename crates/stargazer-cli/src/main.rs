//! Terminal front end for the Stargazer simulation.
//!
//! Wires the progression engine to stdin/stdout: loads configuration,
//! recruits the club, and plays the session either through numbered
//! prompts or, with `--autoplay`, through random decisions.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line arguments
//! 2. Initialize structured logging (tracing, to stderr)
//! 3. Load configuration from `stargazer-config.yaml` or `--config`
//! 4. Seed the dice
//! 5. Create the session and recruit the roster
//! 6. Pick the decision source
//! 7. Run the session until it ends
//! 8. Report the result

mod error;
mod terminal;

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use stargazer_core::{
    DecisionSource, RandomDecisionSource, Session, SimulationConfig, log_session_end, run_session,
};
use stargazer_world::Catalogs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::terminal::{Narrator, Terminal, TerminalDecisionSource, render_result, render_welcome};

/// Configuration file read from the working directory when `--config` is
/// not given.
const DEFAULT_CONFIG_PATH: &str = "stargazer-config.yaml";

#[derive(Parser, Debug)]
#[command(name = "stargazer")]
#[command(author, version, about = "Coach an astronomy olympiad club", long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible playthrough
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of students to recruit (skips the prompt)
    #[arg(short = 'n', long)]
    students: Option<usize>,

    /// Let the computer make every decision
    #[arg(long)]
    autoplay: bool,
}

fn main() -> Result<(), CliError> {
    // 1. Parse arguments.
    let args = Args::parse();

    // 2. Initialize structured logging. Stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!("stargazer starting");

    // 3. Load configuration.
    let config = load_config(args.config.as_deref())?;
    info!(
        horizon_years = config.calendar.horizon_years,
        starting_funds = config.economy.starting_funds,
        menu_size = config.training.menu_size,
        "Configuration loaded"
    );

    // 4. Seed the dice. The seed is logged so a run can be replayed.
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut dice = SmallRng::seed_from_u64(seed);
    info!(seed, "Dice seeded");

    // 5. Create the session and recruit.
    let mut session = Session::new(config, Catalogs::standard())?;
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let requested = match args.students {
        Some(requested) => requested,
        None if args.autoplay => session.config.roster.default_size,
        None => {
            render_welcome(terminal.output())?;
            let roster = &session.config.roster;
            terminal.ask_roster_size(roster.default_size, roster.min_size, roster.max_size)?
        }
    };
    session.recruit(requested, &mut dice)?;

    // 6. Pick the decision source.
    let mut decisions: Box<dyn DecisionSource> = if args.autoplay {
        info!("Autoplay enabled");
        Box::new(RandomDecisionSource::seeded(seed.wrapping_add(1)))
    } else {
        Box::new(TerminalDecisionSource::new(terminal))
    };
    let mut narrator = Narrator::new(io::stdout(), args.autoplay);

    // 7. Run the session.
    let result = run_session(&mut session, decisions.as_mut(), &mut dice, &mut narrator);

    // 8. Report the result.
    log_session_end(&result);
    render_result(&mut io::stdout(), &result)?;

    Ok(())
}

/// Load the simulation configuration.
///
/// An explicit path must exist. Without one, `stargazer-config.yaml` in the
/// working directory is used if present, and the built-in game otherwise.
fn load_config(path: Option<&Path>) -> Result<SimulationConfig, CliError> {
    if let Some(path) = path {
        return Ok(SimulationConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(SimulationConfig::from_file(default_path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(SimulationConfig::default())
    }
}
