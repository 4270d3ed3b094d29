//! In-memory score repository for testing.

use std::sync::{Arc, Mutex};

use crate::{Result, ports::ScoreRepository, scores::ScoreBoard};

/// Score record held in memory.
///
/// Clones share the same record, so a test can keep one handle and give
/// another to the code under test.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<Option<ScoreBoard>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `scores`.
    pub fn with_scores(scores: ScoreBoard) -> Self {
        Self {
            storage: Arc::new(Mutex::new(Some(scores))),
            saves: Arc::default(),
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl ScoreRepository for InMemoryRepository {
    fn load(&self) -> Result<ScoreBoard> {
        Ok(self.storage.lock().unwrap().unwrap_or_default())
    }

    fn save(&self, scores: &ScoreBoard) -> Result<()> {
        *self.storage.lock().unwrap() = Some(*scores);
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
