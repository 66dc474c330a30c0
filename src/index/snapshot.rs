use crate::error::BuildError;
use crate::index::build::IndexBuilder;
use crate::index::inverted::InvertedIndex;
use crate::index::store::DocumentStore;
use crate::index::types::{BuildStats, IndexConfig, Posting};
use crate::query::{self, MatchGroup, SnippetRow};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

/// The result of one build: documents, index and stats, read-only from here on
#[derive(Debug)]
pub struct IndexSnapshot {
    root: PathBuf,
    store: DocumentStore,
    index: InvertedIndex,
    stats: BuildStats,
}

impl IndexSnapshot {
    pub(crate) fn new(
        root: PathBuf,
        store: DocumentStore,
        index: InvertedIndex,
        stats: BuildStats,
    ) -> Self {
        Self {
            root,
            store,
            index,
            stats,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Lines containing every query term, in build order
    pub fn search(&self, query: &str) -> Vec<Posting> {
        query::search(&self.index, &self.store, query)
    }

    /// Matches grouped per file with at most `cap` lines each
    pub fn group(&self, query: &str, cap: usize) -> Vec<MatchGroup> {
        query::group(&self.search(query), cap)
    }

    /// Flat, display-ready rows for a query
    pub fn rows(&self, query: &str, cap: usize) -> Vec<SnippetRow> {
        query::snippet_rows(&self.group(query, cap), &self.store)
    }
}

/// Handle to the current snapshot that can be replaced while queries run.
///
/// Readers clone the `Arc` and keep using their snapshot even if a rebuild
/// swaps in a new one; nothing a reader holds is ever mutated.
#[derive(Debug)]
pub struct SharedIndex {
    current: RwLock<Arc<IndexSnapshot>>,
}

impl SharedIndex {
    pub fn new(snapshot: IndexSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Snapshot queries should run against right now
    pub fn current(&self) -> Arc<IndexSnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Install `snapshot` and return the one it replaced
    pub fn replace(&self, snapshot: IndexSnapshot) -> Arc<IndexSnapshot> {
        let next = Arc::new(snapshot);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }

    /// Rebuild from the current root and swap on success.
    ///
    /// The build runs without holding the lock. On failure the previous
    /// snapshot stays installed and the error is returned.
    pub fn rebuild(&self, config: &IndexConfig) -> Result<BuildStats, BuildError> {
        let root = self.current().root().to_path_buf();
        match IndexBuilder::new(config.clone()).build(&root) {
            Ok(snapshot) => {
                let stats = snapshot.stats().clone();
                self.replace(snapshot);
                info!(root = %root.display(), "index snapshot replaced");
                Ok(stats)
            }
            Err(err) => {
                warn!(root = %root.display(), error = %err, "rebuild failed, keeping previous index");
                Err(err)
            }
        }
    }

    /// Run [`rebuild`](Self::rebuild) on a background thread
    pub fn spawn_rebuild(
        self: &Arc<Self>,
        config: IndexConfig,
    ) -> JoinHandle<Result<BuildStats, BuildError>> {
        let shared = Arc::clone(self);
        thread::spawn(move || shared.rebuild(&config))
    }
}
