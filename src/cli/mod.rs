//! Terminal front end: the collaborator that owns the board, takes the
//! human's moves and asks the engine for replies.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
