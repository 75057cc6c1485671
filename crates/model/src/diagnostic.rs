use std::fmt;
use std::path::PathBuf;

/// A non-fatal problem found while extracting or linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A subclass names a parent that was never declared.
    UnresolvedParent { class: String, parent: String },
    /// A class function has no matching header signature.
    MissingSignature { class: String, function: String },
    /// A second class registered under an already used name.
    DuplicateClass { name: String },
    /// A per-class macro appeared before any class macro in its file.
    OrphanClassMember {
        path: PathBuf,
        line: usize,
        macro_name: String,
        name: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedParent { class, parent } => {
                write!(f, "Parent not found for {class}: {parent}")
            }
            Self::MissingSignature { class, function } => {
                write!(f, "Failed to find parameters for {class}:{function}")
            }
            Self::DuplicateClass { name } => {
                write!(f, "Class {name} registered more than once")
            }
            Self::OrphanClassMember {
                path,
                line,
                macro_name,
                name,
            } => write!(
                f,
                "{}:{line}: {macro_name}({name}) outside of any class",
                path.display()
            ),
        }
    }
}

/// Diagnostics in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a diagnostic and surface it on the log channel.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.items.push(diagnostic);
    }

    pub fn append(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
