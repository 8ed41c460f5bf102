//! Strictly In-a-Row CLI - two players, one terminal
//!
//! Wires the pure engine from [`strictly_inarow`] to stdin/stdout:
//!
//! - **Cli**: argument parsing and configuration resolution
//! - **Input**: line-based [`InputProvider`](strictly_inarow::InputProvider) over any reader
//! - **Session**: the prompt loop and the post-game history offer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod session;

pub use cli::{Cli, SummaryFormat};
pub use input::LineInput;
pub use session::{Session, SessionError};
