//! # Script Docs Model
//!
//! The cross-referenced documentation model shared by every pass.
//!
//! ```text
//! ScriptDocs (declaration list, scan order)
//!     ├─ Declaration::Class(ScriptClass)
//!     │      ├─ functions: ScriptFunction[]
//!     │      ├─ members:   ScriptMember[]
//!     │      ├─ callbacks: String[]
//!     │      └─ parent / children: ClassId (non-owning)
//!     └─ Declaration::Function(ScriptFunction)
//! ```
//!
//! Extractors populate the model, the linker mutates it in place, and the
//! renderers only read it.

mod diagnostic;
mod docs;
mod entity;
mod signature;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use docs::{ClassDisplay, ClassId, Declaration, ScriptDocs};
pub use entity::{ScriptClass, ScriptFunction, ScriptMember};
pub use signature::{Signature, SignatureTable};
