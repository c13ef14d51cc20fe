use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::LoadError;
use super::loader;
use super::model::Dataset;
use super::synthetic;

/// Where a dataset comes from. Doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    File(PathBuf),
    Synthetic { seed: u64 },
}

impl Source {
    /// Identity used as the cache key. File paths are canonicalized so
    /// `songs.csv` and `./songs.csv` share one entry; a path that cannot be
    /// resolved is used as given.
    fn key(&self) -> Source {
        match self {
            Source::File(path) => {
                Source::File(std::fs::canonicalize(path).unwrap_or_else(|_| path.clone()))
            }
            other => other.clone(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Synthetic { seed } => write!(f, "sample data (seed {seed})"),
        }
    }
}

/// Loaded datasets keyed by source. A source is loaded at most once until it
/// is invalidated; failed loads are not remembered.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<Source, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, source: &Source) -> Result<Arc<Dataset>, LoadError> {
        let key = source.key();
        if let Some(dataset) = self.entries.get(&key) {
            log::debug!("Dataset cache hit for {source}");
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(match source {
            Source::File(path) => loader::load(path)?,
            Source::Synthetic { seed } => synthetic::generate_synthetic(*seed),
        });
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the cached dataset for `source`. Returns whether one was cached.
    pub fn invalidate(&mut self, source: &Source) -> bool {
        let removed = self.entries.remove(&source.key()).is_some();
        if removed {
            log::info!("Invalidated cached dataset for {source}");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, source: &Source) -> bool {
        self.entries.contains_key(&source.key())
    }
}
