use scriptdoc_collector::SourceCollector;
use scriptdoc_extractor::{DeclarationExtractor, SignatureExtractor};
use scriptdoc_linker::Linker;
use scriptdoc_model::{Diagnostics, ScriptDocs};
use std::path::PathBuf;
use std::time::Instant;

/// Directories scanned when nothing else is configured, relative to the
/// working directory: the game sources and the engine next to them.
pub const DEFAULT_ROOTS: [&str; 2] = ["src", "../SeriousProton/src"];

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub roots: Vec<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// A linked model plus everything that went wrong building it.
#[derive(Debug)]
pub struct Generated {
    pub docs: ScriptDocs,
    pub diagnostics: Diagnostics,
}

/// Collect, extract, and link. Never fails; problems become diagnostics.
pub fn generate(config: &ScanConfig) -> Generated {
    let start = Instant::now();

    let sources = SourceCollector::collect(&config.roots);
    let signatures = SignatureExtractor::extract(&sources);
    let extraction = DeclarationExtractor::extract(&sources);

    let mut docs = extraction.docs;
    let mut diagnostics = extraction.diagnostics;
    diagnostics.append(Linker::new(&signatures).link(&mut docs));

    log::info!(
        "Documented {} declarations from {} files in {:?}",
        docs.len(),
        sources.len(),
        start.elapsed()
    );

    Generated { docs, diagnostics }
}
