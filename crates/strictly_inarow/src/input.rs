//! Where moves come from.
//!
//! The engine never reads a terminal itself. A front end implements
//! [`InputProvider`] to hand over one raw line per prompt; parsing into a
//! typed [`Position`] happens here, before the engine sees anything.

use super::{ParseError, Position};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// One answer to "where should the current player go?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInput {
    /// Syntactically valid coordinates. Range and occupancy are still
    /// up to the engine.
    Move(Position),
    /// The line could not be read as a coordinate pair; prompt again.
    Malformed(ParseError),
    /// No more input will arrive.
    Closed,
}

impl MoveInput {
    /// Parses one raw line of player input.
    #[instrument]
    pub fn from_line(line: &str) -> Self {
        match line.parse::<Position>() {
            Ok(position) => MoveInput::Move(position),
            Err(e) => {
                debug!(error = %e, "Rejected malformed move");
                MoveInput::Malformed(e)
            }
        }
    }
}

/// Source of raw player input.
pub trait InputProvider {
    /// Reads one line of input, without the trailing newline.
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self) -> Option<String>;

    /// Reads and parses the next move.
    fn next_move(&mut self) -> MoveInput {
        match self.read_line() {
            Some(line) => MoveInput::from_line(&line),
            None => MoveInput::Closed,
        }
    }
}

/// Replays a fixed list of lines, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates a script from lines in play order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}
