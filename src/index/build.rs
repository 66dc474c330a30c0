use crate::error::BuildError;
use crate::index::inverted::InvertedIndex;
use crate::index::snapshot::IndexSnapshot;
use crate::index::store::DocumentStore;
use crate::index::types::{BuildStats, IndexConfig, LineNo};
use crate::index::walk::{FileSystem, OsFileSystem};
use crate::utils::progress::BuildProgress;
use crate::utils::{decode_lossy, split_lines, unique_terms};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// A file read and tokenized, ready to merge into the index
struct ProcessedFile {
    path: PathBuf,
    lines: Vec<String>,
    /// Deduplicated terms of each line, same order as `lines`
    line_terms: Vec<Vec<String>>,
}

enum FileOutcome {
    Indexed(ProcessedFile),
    Skipped,
}

/// Builds an [`IndexSnapshot`] from a directory tree
pub struct IndexBuilder<F = OsFileSystem> {
    config: IndexConfig,
    fs: F,
    silent: bool,
}

impl IndexBuilder<OsFileSystem> {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            fs: OsFileSystem,
            silent: true,
        }
    }
}

impl<F: FileSystem> IndexBuilder<F> {
    /// Swap the filesystem the builder walks and reads
    pub fn with_fs<G: FileSystem>(self, fs: G) -> IndexBuilder<G> {
        IndexBuilder {
            config: self.config,
            fs,
            silent: self.silent,
        }
    }

    /// Show a progress bar while files are processed
    pub fn progress(mut self, enabled: bool) -> Self {
        self.silent = !enabled;
        self
    }

    /// Walk `root` and build a fresh snapshot.
    ///
    /// Fails only when `root` is missing, is not a directory, or an exclude
    /// pattern is invalid. Files that cannot be read are skipped and counted.
    pub fn build(&self, root: &Path) -> Result<IndexSnapshot, BuildError> {
        let start = Instant::now();
        self.check_root(root)?;
        let excludes = compile_excludes(&self.config.exclude)?;

        // Phase 1: enumerate candidates, each path once
        let mut seen = FxHashSet::default();
        let candidates: Vec<PathBuf> = self
            .fs
            .entries(root, &self.config)
            .into_iter()
            .filter(|entry| entry.is_file && self.accepts(root, &entry.path, &excludes))
            .map(|entry| entry.path)
            .filter(|path| seen.insert(path.clone()))
            .collect();

        debug!(root = %root.display(), candidates = candidates.len(), "walk finished");

        // Phase 2: read and tokenize in parallel; collect keeps walk order
        let progress = BuildProgress::new(candidates.len(), self.silent);
        let outcomes: Vec<FileOutcome> = candidates
            .into_par_iter()
            .map(|path| {
                let outcome = self.process_file(path);
                progress.tick();
                outcome
            })
            .collect();
        progress.finish();

        // Phase 3: merge sequentially so ids and posting order are stable
        let mut store = DocumentStore::new();
        let mut index = InvertedIndex::new();
        let mut stats = BuildStats::default();

        for outcome in outcomes {
            match outcome {
                FileOutcome::Indexed(file) => {
                    let doc_id = store.insert(file.path, file.lines);
                    for (idx, terms) in file.line_terms.into_iter().enumerate() {
                        let line = (idx + 1) as LineNo;
                        for term in terms {
                            index.insert(term, doc_id, line);
                        }
                    }
                    stats.files_indexed += 1;
                }
                FileOutcome::Skipped => stats.files_skipped += 1,
            }
        }

        stats.terms = index.term_count();
        stats.postings = index.posting_count();
        stats.elapsed = start.elapsed();

        info!(
            root = %root.display(),
            files_indexed = stats.files_indexed,
            files_skipped = stats.files_skipped,
            terms = stats.terms,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "index built"
        );

        Ok(IndexSnapshot::new(root.to_path_buf(), store, index, stats))
    }

    fn check_root(&self, root: &Path) -> Result<(), BuildError> {
        match self.fs.root_is_dir(root) {
            Ok(true) => Ok(()),
            Ok(false) => Err(BuildError::NotADirectory(root.to_path_buf())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(BuildError::RootNotFound(root.to_path_buf()))
            }
            Err(source) => Err(BuildError::Io {
                path: root.to_path_buf(),
                source,
            }),
        }
    }

    fn accepts(&self, root: &Path, path: &Path, excludes: &GlobSet) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if !self.config.accepts_name(&name.to_string_lossy()) {
            return false;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        !excludes.is_match(rel)
    }

    fn process_file(&self, path: PathBuf) -> FileOutcome {
        let bytes = match self.fs.read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable file");
                return FileOutcome::Skipped;
            }
        };

        if bytes.len() as u64 > self.config.max_file_size {
            debug!(path = %path.display(), size = bytes.len(), "skipping oversized file");
            return FileOutcome::Skipped;
        }

        let lines = split_lines(&decode_lossy(&bytes));
        let line_terms = lines.iter().map(|line| unique_terms(line)).collect();

        FileOutcome::Indexed(ProcessedFile {
            path,
            lines,
            line_terms,
        })
    }
}

fn compile_excludes(patterns: &[String]) -> Result<GlobSet, BuildError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Build an index of `root` on the real filesystem without progress output
pub fn build_index(root: &Path, config: &IndexConfig) -> Result<IndexSnapshot, BuildError> {
    IndexBuilder::new(config.clone()).build(root)
}
