//! # Script Docs Extractor
//!
//! Line-oriented scanners that pull documentation out of loosely structured
//! C++ sources without parsing them.
//!
//! ## Passes
//!
//! - **Signatures** - header files only; `Owner::method(args)` anywhere on a
//!   line, plus `type method(args)` once a `class Name` line has been seen.
//! - **Declarations** - every file; `///` comment blocks attach to the next
//!   `REGISTER_SCRIPT_*` macro.
//!
//! Lines starting with `#` are invisible to both passes.

mod declaration;
mod macros;
mod signature;

pub use declaration::{DeclarationExtractor, Extraction};
pub use macros::DeclarationMacro;
pub use signature::SignatureExtractor;

/// Preprocessor directives are skipped by every pass.
fn is_directive(line: &str) -> bool {
    line.starts_with('#')
}
