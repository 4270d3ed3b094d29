//! JSON file implementation of the score repository.

use std::{
    fs::{self, File},
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{Result, error::Error, ports::ScoreRepository, scores::ScoreBoard};

/// Score record stored as `{"player": n, "computer": n, "ties": n}`.
///
/// A missing file means no games have been recorded yet. A file that exists
/// but does not parse is treated the same way (with a warning) so a damaged
/// record never blocks play; the next save overwrites it.
///
/// # Examples
///
/// ```no_run
/// use unbeatable::adapters::JsonScoreRepository;
/// use unbeatable::ports::ScoreRepository;
///
/// let repo = JsonScoreRepository::new("ttt-scores.json");
/// let scores = repo.load()?;
/// println!("{} games so far", scores.total());
/// # Ok::<(), unbeatable::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonScoreRepository {
    path: PathBuf,
}

impl JsonScoreRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreRepository for JsonScoreRepository {
    fn load(&self) -> Result<ScoreBoard> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no score file yet");
                return Ok(ScoreBoard::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("open score file {:?}", self.path),
                    source,
                });
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(scores) => Ok(scores),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable score file");
                Ok(ScoreBoard::default())
            }
        }
    }

    fn save(&self, scores: &ScoreBoard) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create directory {parent:?}"),
                source,
            })?;
        }

        let file = File::create(&self.path).map_err(|source| Error::Io {
            operation: format!("create score file {:?}", self.path),
            source,
        })?;
        serde_json::to_writer_pretty(file, scores)?;
        Ok(())
    }
}
