//! # Script Docs Render
//!
//! Read-only consumers of a linked [`ScriptDocs`].
//!
//! A function whose `parameters` is `None` is shown as "not found", never as
//! a function without arguments.

mod escape;
mod html;
mod json;

pub use escape::{escape_description, escape_text};
pub use html::{HtmlRenderer, RenderOptions, NOT_FOUND_MARKER};
pub use json::JsonRenderer;

use scriptdoc_model::ScriptDocs;
use std::io::{self, Write};

/// Writes a linked model as a document.
pub trait Renderer {
    fn render(&self, docs: &ScriptDocs, out: &mut dyn Write) -> io::Result<()>;
}
