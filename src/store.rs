//! Best-score persistence.
//!
//! The store holds a single integer. Failures are soft by contract: the
//! session falls back to 0 on a failed read and keeps its in-memory
//! value on a failed write.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};

use crate::core::ports::ScoreStore;

/// File-backed store: the score as a decimal string in a small file
/// under the platform data directory.
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the conventional per-user location.
    pub fn at_default_path() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| anyhow!("no platform data directory"))?;
        Ok(Self::new(base.join("tui-recall").join("best_score")))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        text.trim()
            .parse()
            .with_context(|| format!("parsing best score from {}", self.path.display()))
    }

    fn save(&mut self, best: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&self.path, best.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

/// In-memory store for tests and headless runs.
///
/// `handle()` hands out a read view of the stored value, so tests can
/// observe persistence without touching the session's store.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    best: Rc<Cell<u32>>,
    fail: bool,
}

impl MemoryScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self {
            best: Rc::new(Cell::new(best)),
            fail: false,
        }
    }

    /// A store whose reads and writes always fail.
    pub fn failing() -> Self {
        Self {
            best: Rc::new(Cell::new(0)),
            fail: true,
        }
    }

    pub fn handle(&self) -> MemoryScoreHandle {
        MemoryScoreHandle {
            best: Rc::clone(&self.best),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Result<u32> {
        if self.fail {
            return Err(anyhow!("score store unavailable"));
        }
        Ok(self.best.get())
    }

    fn save(&mut self, best: u32) -> Result<()> {
        if self.fail {
            return Err(anyhow!("score store unavailable"));
        }
        self.best.set(best);
        Ok(())
    }
}

/// Read view into a [`MemoryScoreStore`].
#[derive(Debug, Clone)]
pub struct MemoryScoreHandle {
    best: Rc<Cell<u32>>,
}

impl MemoryScoreHandle {
    pub fn get(&self) -> u32 {
        self.best.get()
    }
}
