//! Ports (trait boundaries) for external dependencies.
//!
//! The engine and the match session are pure; the only outside concern is
//! where the score record is kept.

pub mod repository;

pub use repository::ScoreRepository;
