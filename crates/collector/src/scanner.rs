use crate::include::include_targets;
use crate::kind::SourceKind;
use crate::reader::read_source;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The universe of files to scan, ordered by path so that every pass sees
/// files in the same order on every run.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    files: BTreeSet<PathBuf>,
    keys: HashSet<PathBuf>,
}

impl SourceSet {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Header files only; the input of signature extraction.
    pub fn headers(&self) -> impl Iterator<Item = &Path> {
        self.iter().filter(|path| SourceKind::from_path(path).is_header())
    }

    /// Whether `path` resolves to a file already in the set.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.keys.contains(&dedup_key(path.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Accumulates a [`SourceSet`] from directories and individual files.
#[derive(Debug, Default)]
pub struct SourceCollector {
    set: SourceSet,
}

impl SourceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every file under each root.
    pub fn collect<P: AsRef<Path>>(roots: &[P]) -> SourceSet {
        let mut collector = Self::new();
        for root in roots {
            collector.add_directory(root);
        }
        collector.finish()
    }

    /// Add every regular file below `dir`. A missing directory is ignored.
    pub fn add_directory(&mut self, dir: impl AsRef<Path>) {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            log::debug!("Skipping missing directory {}", dir.display());
            return;
        }

        let before = self.set.len();
        for entry in WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if entry.file_type().is_file() {
                self.add_file(entry.path());
            }
        }

        log::info!(
            "Collected {} files from {}",
            self.set.len() - before,
            dir.display()
        );
    }

    /// Add `path` and, for C-family sources, everything it includes.
    ///
    /// Files are visited at most once, so include cycles terminate.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        let mut pending = vec![path.as_ref().to_path_buf()];

        while let Some(path) = pending.pop() {
            if !path.is_file() {
                continue;
            }
            if !self.set.keys.insert(dedup_key(&path)) {
                continue;
            }
            self.set.files.insert(path.clone());

            if !SourceKind::from_path(&path).follows_includes() {
                continue;
            }

            let source = match read_source(&path) {
                Ok(source) => source,
                Err(err) => {
                    log::debug!("{err}");
                    continue;
                }
            };

            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            // Pushed in reverse so the bare name is tried first.
            for target in include_targets(&source).into_iter().rev() {
                pending.push(dir.join(&target));
                pending.push(PathBuf::from(target));
            }
        }
    }

    pub fn finish(self) -> SourceSet {
        self.set
    }
}

fn dedup_key(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
