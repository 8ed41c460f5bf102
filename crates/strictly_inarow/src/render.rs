//! Turning snapshots into something a person can read.

use super::board::Grid;
use super::history::{History, Snapshot};
use super::GameStatus;
use serde_json::{Value, json};
use tracing::instrument;

/// Display seam for boards and post-game summaries.
pub trait Renderer {
    /// Renders one board snapshot.
    fn render_board(&self, snapshot: &Snapshot) -> String;

    /// Renders every ply of `history` followed by the outcome.
    fn render_summary(&self, history: &History, status: GameStatus) -> String;
}

/// Plain-text grid with row and column labels.
///
/// ```text
///    0   1   2
/// 0  X | O | X
///   -----------
/// 1    | X |
///   -----------
/// 2    |   | O
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Divider drawn between rows.
    fn divider(size: usize) -> String {
        "-".repeat((4 * size).saturating_sub(1))
    }

    /// Final sentence of the summary.
    pub fn outcome_line(plies: usize, status: GameStatus) -> String {
        match status {
            GameStatus::Won(winner) => format!(
                "The game ended in {plies} turns, with {winner} being the winner."
            ),
            GameStatus::Draw => format!("The game ended in {plies} turns, with no winners."),
            GameStatus::InProgress => {
                format!("The game is still in progress after {plies} turns.")
            }
        }
    }
}

impl Renderer for TextRenderer {
    #[instrument(skip_all, fields(size = snapshot.size()))]
    fn render_board(&self, snapshot: &Snapshot) -> String {
        let size = snapshot.size();
        let header: String = (0..size).map(|col| format!(" {col}  ")).collect();
        let mut out = format!("  {}\n", header.trim_end());

        for (row, squares) in snapshot.rows().enumerate() {
            if row > 0 {
                out.push_str(&format!("  {}\n", Self::divider(size)));
            }
            let cells: Vec<String> = squares.iter().map(|s| s.symbol().to_string()).collect();
            out.push_str(&format!("{row}  {}\n", cells.join(" | ")));
        }

        out
    }

    #[instrument(skip_all, fields(plies = history.plies(), %status))]
    fn render_summary(&self, history: &History, status: GameStatus) -> String {
        let mut out = String::new();
        for (ply, snapshot) in history.replay().skip(1) {
            out.push_str(&format!("On turn {ply} the board looked like:\n\n"));
            out.push_str(&self.render_board(snapshot));
            out.push('\n');
        }
        out.push_str(&Self::outcome_line(history.plies(), status));
        out.push('\n');
        out
    }
}

/// Machine-readable rendering as pretty-printed JSON.
///
/// Rows are strings of one character per square: `X`, `O` or a space.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    fn rows(snapshot: &Snapshot) -> Vec<String> {
        snapshot
            .rows()
            .map(|row| row.iter().map(|s| s.symbol()).collect())
            .collect()
    }

    fn status_name(status: GameStatus) -> &'static str {
        match status {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won(_) => "won",
            GameStatus::Draw => "draw",
        }
    }
}

impl Renderer for JsonRenderer {
    fn render_board(&self, snapshot: &Snapshot) -> String {
        let value = json!({
            "size": snapshot.size(),
            "rows": Self::rows(snapshot),
        });
        format!("{value:#}")
    }

    #[instrument(skip_all, fields(plies = history.plies(), %status))]
    fn render_summary(&self, history: &History, status: GameStatus) -> String {
        let plies: Vec<Value> = history
            .replay()
            .map(|(ply, snapshot)| json!({ "ply": ply, "rows": Self::rows(snapshot) }))
            .collect();
        let value = json!({
            "turns": history.plies(),
            "status": Self::status_name(status),
            "winner": status.winner(),
            "plies": plies,
        });
        format!("{value:#}")
    }
}
