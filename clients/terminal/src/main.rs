mod art;
mod config;
mod console;
mod rules;

use std::fs::OpenOptions;
use std::io;

use blackjack::Deck;
use twentyone::{Game, GameError, Participant, Session};

use crate::config::{Config, ConfigError};
use crate::console::{Console, Terminal};

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

fn init_logger(config: &Config) -> Result<(), ConfigError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::LogFile {
                path: path.clone(),
                source,
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run() -> Result<(), BoxErr> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_logger(&config)?;

    let rules = rules::load(config.rules_file.as_deref())?;
    let deck = match config.seed {
        Some(seed) => {
            log::info!("Shuffling with fixed seed {seed}");
            Deck::seeded(seed)
        }
        None => Deck::new(),
    };
    let dealer = Participant::random_dealer(&mut rand::thread_rng());
    let session = Session::new(deck, Participant::player(""), dealer);

    let stdin = io::stdin();
    let terminal = Terminal::new(Console::new(stdin.lock(), io::stdout(), &config, rules));
    let mut game = Game::new(session, terminal.clone(), terminal);

    match game.play() {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed) => {
            log::info!("Input closed, leaving the table");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
