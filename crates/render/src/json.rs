use crate::Renderer;
use scriptdoc_model::{ScriptDocs, ScriptFunction, ScriptMember};
use serde::Serialize;
use std::io::{self, Write};

/// Pretty-printed JSON snapshot of the linked model, with class references
/// resolved to names.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct DocumentView<'a> {
    classes: Vec<ClassView<'a>>,
    functions: Vec<&'a ScriptFunction>,
}

#[derive(Serialize)]
struct ClassView<'a> {
    name: &'a str,
    parent: Option<&'a str>,
    children: Vec<&'a str>,
    description: &'a str,
    create: bool,
    functions: &'a [ScriptFunction],
    members: &'a [ScriptMember],
    callbacks: &'a [String],
}

impl<'a> DocumentView<'a> {
    fn new(docs: &'a ScriptDocs) -> Self {
        let classes = docs
            .classes()
            .map(|(id, class)| ClassView {
                name: &class.name,
                parent: docs.parent_of(id).map(|p| p.name.as_str()),
                children: docs.children_of(id).map(|c| c.name.as_str()).collect(),
                description: &class.description,
                create: class.create,
                functions: &class.functions,
                members: &class.members,
                callbacks: &class.callbacks,
            })
            .collect();

        Self {
            classes,
            functions: docs.functions().collect(),
        }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, docs: &ScriptDocs, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &DocumentView::new(docs))?;
        writeln!(out)
    }
}
