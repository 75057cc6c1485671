//! # Script Docs Linker
//!
//! Turns the raw declaration list into a consistent object graph.
//!
//! ```text
//! ScriptDocs + SignatureTable
//!     │
//!     ├──> Signature linking   (origin class, name) -> parameters
//!     │
//!     └──> Parent linking      parent name -> ClassId, children edges,
//!                              default members on declared roots
//! ```
//!
//! Neither pass fails; anything unresolved is reported as a [`Diagnostic`].
//!
//! [`Diagnostic`]: scriptdoc_model::Diagnostic

mod defaults;
mod index;
mod linker;

pub use defaults::{synthesize_root_members, DESTROY, IS_VALID, TYPE_NAME};
pub use index::{ClassIndex, SignatureIndex};
pub use linker::{link, Linker};
