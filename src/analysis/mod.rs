//! Whole-game-tree analysis of the engine
//!
//! Tic-Tac-Toe is small enough to check the engine against every line of
//! play: no human strategy beats it, and pruning never changes its answer.

pub mod verification;

pub use verification::{
    DifferentialReport, Disagreement, VerificationReport, compare_with_reference,
    engine_reachable_positions, move_histogram, reachable_o_positions, verify_chooser,
    verify_engine,
};
