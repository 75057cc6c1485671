use std::path::Path;

/// Classification of a file by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    C,
    Cpp,
    Header,
    Other,
}

impl SourceKind {
    /// Detect kind from file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "c" => Self::C,
            "cpp" => Self::Cpp,
            "h" => Self::Header,
            _ => Self::Other,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Other, Self::from_extension)
    }

    /// Whether `#include` directives in this file are followed.
    pub const fn follows_includes(self) -> bool {
        matches!(self, Self::C | Self::Cpp | Self::Header)
    }

    pub const fn is_header(self) -> bool {
        matches!(self, Self::Header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(SourceKind::from_path("src/shipTemplate.H"), SourceKind::Header);
        assert_eq!(SourceKind::from_path("src/main.CPP"), SourceKind::Cpp);
        assert_eq!(SourceKind::from_path("lib/lua.c"), SourceKind::C);
    }

    #[test]
    fn only_c_family_follows_includes() {
        assert!(SourceKind::from_path("a.h").follows_includes());
        assert!(!SourceKind::from_path("a.hpp").follows_includes());
        assert!(!SourceKind::from_path("scenario.lua").follows_includes());
        assert!(!SourceKind::from_path("Makefile").follows_includes());
    }
}
