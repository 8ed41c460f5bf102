//! Game rules for N-in-a-row.
//!
//! This module contains pure functions for evaluating a board according
//! to the rules. They take any [`Grid`](crate::Grid), so they work on the
//! live board and on history snapshots alike.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LineKind, WinningLine, check_winner, has_win, winning_line};
