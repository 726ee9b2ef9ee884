pub mod engine;
pub mod error;
pub mod io;
pub mod participant;
pub mod state;

pub use crate::engine::Game;
pub use crate::error::GameError;
pub use crate::io::{Event, HandView, Input, Prompt, Screen};
pub use crate::participant::{Participant, Seat};
pub use crate::state::{Phase, RoundResult, Session, Tally};
