#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lsearch::index::{FileSystem, IndexBuilder, IndexConfig, WalkEntry};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Arbitrary, Debug)]
struct Input {
    files: Vec<Vec<u8>>,
    query: String,
    cap: u8,
}

/// Flat in-memory directory built from the fuzz input
struct FuzzFs {
    files: Vec<Vec<u8>>,
}

impl FileSystem for FuzzFs {
    fn root_is_dir(&self, _root: &Path) -> io::Result<bool> {
        Ok(true)
    }

    fn entries(&self, root: &Path, _config: &IndexConfig) -> Vec<WalkEntry> {
        (0..self.files.len())
            .map(|i| WalkEntry {
                path: root.join(format!("{}.txt", i)),
                is_file: true,
            })
            .collect()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let idx: usize = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        self.files
            .get(idx)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

fuzz_target!(|input: Input| {
    let fs = FuzzFs { files: input.files };
    let Ok(snapshot) = IndexBuilder::new(IndexConfig::default())
        .with_fs(fs)
        .build(&PathBuf::from("/fuzz"))
    else {
        return;
    };

    // Every match must point at a stored line, in build order
    let matches = snapshot.search(&input.query);
    assert!(matches.windows(2).all(|w| w[0] < w[1]));
    for m in &matches {
        assert!(snapshot.store().line(m.doc_id, m.line).is_some());
    }

    let rows = snapshot.rows(&input.query, input.cap as usize);
    assert!(rows.len() <= matches.len());
});
