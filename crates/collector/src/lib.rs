//! # Script Docs Collector
//!
//! Builds the set of source files the extractors scan.
//!
//! ```text
//! Root directories
//!     │
//!     ├──> Directory walk (every regular file)
//!     │
//!     └──> Include following (.c / .cpp / .h only)
//!            ├─ relative to the including file
//!            └─ as a bare path
//! ```
//!
//! Missing directories and unresolvable includes are skipped without error.

mod error;
mod include;
mod kind;
mod reader;
mod scanner;

pub use error::{CollectorError, Result};
pub use include::include_targets;
pub use kind::SourceKind;
pub use reader::{read_source, read_source_lossy};
pub use scanner::{SourceCollector, SourceSet};
