//! Full-screen terminal blackjack.

use std::env;
use std::fs::File;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use bjterm::terminal::TermionTerminal;
use bjterm::ui::Presenter;
use bjterm::{RoundError, Session, TableOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// Names a file to write logs to. Logging is off without it.
const LOG_ENV: &str = "BJTERM_LOG";
/// Fixes the shuffle seed for a replayable game.
const SEED_ENV: &str = "BJTERM_SEED";

fn init_logging() {
    let Ok(path) = env::var(LOG_ENV) else {
        return;
    };

    match File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_max_level(tracing::Level::DEBUG)
                .init();
        }
        Err(err) => eprintln!("cannot open log file {path}: {err}"),
    }
}

/// Parses a seed override. A bad value is reported on stderr, which is still
/// the plain terminal at this point.
fn parse_seed(raw: &str) -> Option<u64> {
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(err) => {
            eprintln!("ignoring {SEED_ENV}={raw}: {err}");
            warn!(%raw, %err, "ignoring unparsable seed");
            None
        }
    }
}

fn seed() -> u64 {
    if let Some(seed) = env::var(SEED_ENV).ok().as_deref().and_then(parse_seed) {
        return seed;
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn run(seed: u64) -> Result<(), RoundError<io::Error>> {
    let terminal = TermionTerminal::new().map_err(RoundError::Table)?;
    let table = Presenter::new(terminal, TableOptions::default());
    let mut session = Session::new(table, ChaCha8Rng::seed_from_u64(seed));

    match session.run() {
        Ok(summary) => {
            info!(?summary, "goodbye");
            Ok(())
        }
        Err(RoundError::Table(err)) if err.kind() == io::ErrorKind::Interrupted => {
            info!(summary = ?session.summary(), "interrupted");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn main() -> ExitCode {
    init_logging();

    let seed = seed();
    info!(seed, "starting");

    // The terminal is restored before anything is printed.
    match run(seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bjterm: {err}");
            ExitCode::FAILURE
        }
    }
}
