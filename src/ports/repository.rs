//! Repository port for score persistence.
//!
//! The domain only needs to load and save a [`ScoreBoard`]; where it lives
//! (a JSON file, memory, something else) is up to the adapter.

use crate::{Result, scores::ScoreBoard};

/// Port for persisting and loading the score record.
///
/// # Examples
///
/// ```
/// use unbeatable::adapters::InMemoryRepository;
/// use unbeatable::ports::ScoreRepository;
/// use unbeatable::tictactoe::GameOutcome;
///
/// let repo = InMemoryRepository::new();
/// let mut scores = repo.load()?;
/// scores.record(GameOutcome::Draw);
/// repo.save(&scores)?;
/// assert_eq!(repo.load()?.ties, 1);
/// # Ok::<(), unbeatable::Error>(())
/// ```
pub trait ScoreRepository {
    /// Load the stored record, or an all-zero record if nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error only when the storage itself cannot be read.
    fn load(&self) -> Result<ScoreBoard>;

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, scores: &ScoreBoard) -> Result<()>;
}
