//! Game engine for N-in-a-row.
//!
//! One [`Game`] owns the board, the turn and the history for a single
//! match. All mutation goes through [`Game::submit_move`].

use super::action::{Move, MoveError};
use super::board::Board;
use super::config::{ConfigError, GameConfig};
use super::history::History;
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{self, WinningLine};
use super::{GameStatus, Player, Position};
use tracing::{debug, info, instrument, warn};

/// N-in-a-row game engine.
///
/// Starts `InProgress` with X to move, an empty board and a history
/// holding only that empty board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) moves: Vec<Move>,
    pub(crate) history: History,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let board = Board::empty(*config.width());
        let history = History::new(&board);
        Self {
            config,
            board,
            to_move: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            moves: Vec::new(),
            history,
        }
    }

    /// Creates a new game from raw board width and win length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value is not greater than 1.
    pub fn with_dimensions(width: usize, win_length: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(GameConfig::new(width, win_length)?))
    }

    /// Places the current player's mark at `position`.
    ///
    /// On success the board, move log and history each gain one entry and
    /// the new status is returned:
    /// - `Won(mover)` if the mover now has `win_length` in a row
    /// - `Draw` if the board filled up without a win
    /// - `InProgress` otherwise, with the turn passed to the opponent
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended
    /// - [`MoveError::OutOfRange`] if `position` is off the board
    /// - [`MoveError::CellOccupied`] if the square is taken
    ///
    /// A rejected move changes nothing.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the game invariants no longer hold after
    /// the move was applied. That only happens when internal state was
    /// corrupted, so it is a bug rather than a recoverable error.
    #[instrument(skip(self), fields(player = %self.to_move, ply = self.moves.len() + 1))]
    pub fn submit_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            warn!(status = %self.status, "Move submitted after game end");
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.set(position, player)?;
        self.moves.push(Move::new(player, position));
        self.history.record(&self.board);

        if let Some(line) = rules::winning_line(&self.board, player, *self.config.win_length()) {
            info!(%line, "Game won");
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
        } else {
            if rules::is_full(&self.board) {
                info!(turns = self.moves.len(), "Game drawn");
                self.status = GameStatus::Draw;
            }
            self.to_move = player.opponent();
        }

        #[cfg(debug_assertions)]
        if let Err(violations) = GameInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Game invariants violated after move: {descriptions}");
        }

        debug!(status = %self.status, "Move applied");
        Ok(self.status)
    }

    /// Plays `positions` in order from a fresh game.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(positions))]
    pub fn from_positions(
        config: GameConfig,
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<Self, MoveError> {
        let mut game = Self::new(config);
        for position in positions {
            game.submit_move(position)?;
        }
        Ok(game)
    }

    /// Player whose turn it is, or the winner once the game is won.
    ///
    /// After a draw this is the opponent of whoever filled the last square.
    pub fn current_player(&self) -> Player {
        match self.status {
            GameStatus::Won(winner) => winner,
            GameStatus::InProgress | GameStatus::Draw => self.to_move,
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// The window that decided a won game.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of moves played so far.
    pub fn turns_played(&self) -> usize {
        self.moves.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
