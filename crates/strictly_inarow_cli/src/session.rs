//! One interactive game from first prompt to post-game history.

use std::io::Write;
use strictly_inarow::{
    Game, GameStatus, Grid, InputProvider, MoveError, MoveInput, Renderer, TextRenderer,
};
use tracing::{debug, info, instrument};

const HISTORY_PROMPT: &str = "The game has ended. \
    Enter 'yes' if you would like to view the history of the board, \
    enter anything else if otherwise: ";

/// Reasons a session stops before the game is over.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// Writing to the output failed.
    #[display("Failed to write output: {_0}")]
    #[from]
    Io(std::io::Error),

    /// Input ran out while a move was still needed.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine refused a move for a reason re-prompting cannot fix.
    #[display("Move failed: {_0}")]
    #[from]
    Move(MoveError),
}

/// Drives a [`Game`] with moves from an [`InputProvider`], writing boards
/// and prompts to `W`.
pub struct Session<I, W> {
    game: Game,
    input: I,
    output: W,
    board_renderer: TextRenderer,
    summary_renderer: Box<dyn Renderer>,
    show_history: bool,
}

impl<I: InputProvider, W: Write> Session<I, W> {
    /// Creates a session that asks before showing the history as text.
    pub fn new(game: Game, input: I, output: W) -> Self {
        Self {
            game,
            input,
            output,
            board_renderer: TextRenderer,
            summary_renderer: Box::new(TextRenderer),
            show_history: false,
        }
    }

    /// Uses `renderer` for the post-game history.
    pub fn with_summary(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.summary_renderer = renderer;
        self
    }

    /// Prints the history at the end without asking first.
    pub fn show_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    /// Plays until the game is won or drawn and returns the finished game.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InputClosed`] if input ends mid-game
    /// - [`SessionError::Io`] if output cannot be written
    #[instrument(skip(self), fields(width = *self.game.config().width(), win_length = *self.game.config().win_length()))]
    pub fn run(mut self) -> Result<Game, SessionError> {
        info!("Starting session");
        writeln!(
            self.output,
            "\nTo place your mark, enter the position like the following: \
             (int)row_number (int)column_number"
        )?;
        writeln!(
            self.output,
            "For example, on a board of size {}, a valid input could look like '0 1'",
            self.game.board().size()
        )?;
        self.print_board()?;

        while !self.game.is_over() {
            self.play_turn()?;
        }

        self.offer_history()?;
        Ok(self.game)
    }

    fn print_board(&mut self) -> Result<(), SessionError> {
        if let Some(snapshot) = self.game.history().latest() {
            let board = self.board_renderer.render_board(snapshot);
            writeln!(self.output, "{board}")?;
        }
        Ok(())
    }

    #[instrument(skip(self), fields(player = %self.game.current_player()))]
    fn play_turn(&mut self) -> Result<(), SessionError> {
        let player = self.game.current_player();
        writeln!(self.output, "It's {player}'s turn\n")?;
        write!(self.output, "Where should {player} go: ")?;
        self.output.flush()?;

        loop {
            match self.input.next_move() {
                MoveInput::Move(position) => match self.game.submit_move(position) {
                    Ok(status) => {
                        debug!(%position, %status, "Move accepted");
                        break;
                    }
                    Err(e) if e.is_retryable() => debug!(error = %e, "Move rejected"),
                    Err(e) => return Err(e.into()),
                },
                MoveInput::Malformed(e) => debug!(error = %e, "Malformed input"),
                MoveInput::Closed => return Err(SessionError::InputClosed),
            }
            write!(self.output, "Please enter a valid input: ")?;
            self.output.flush()?;
        }

        self.print_board()?;
        match self.game.status() {
            GameStatus::Won(winner) => {
                if let Some(line) = self.game.winning_line() {
                    info!(%line, "Winning line");
                }
                writeln!(self.output, "{winner} won!")?;
            }
            GameStatus::Draw => writeln!(self.output, "It's a draw.")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    fn offer_history(&mut self) -> Result<(), SessionError> {
        let wanted = self.show_history || {
            write!(self.output, "{HISTORY_PROMPT}")?;
            self.output.flush()?;
            self.input
                .read_line()
                .is_some_and(|answer| answer.trim() == "yes")
        };

        if wanted {
            let summary = self
                .summary_renderer
                .render_summary(self.game.history(), self.game.status());
            writeln!(self.output, "\n{}", summary.trim_end())?;
        } else {
            writeln!(self.output)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
