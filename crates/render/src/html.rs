use crate::escape::{escape_description, escape_text};
use crate::Renderer;
use scriptdoc_model::{ClassId, ScriptClass, ScriptDocs, ScriptFunction};
use std::io::{self, Write};

/// Shown in place of a parameter list when no header signature was linked.
pub const NOT_FOUND_MARKER: &str = "[NOT FOUND; see SeriousProton]";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page title and top-level heading.
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Scripting Reference".to_string(),
        }
    }
}

/// Plain structural HTML: class tree, free functions, one section per class.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn write_class_tree(docs: &ScriptDocs, id: ClassId, out: &mut dyn Write) -> io::Result<()> {
        let class = docs.class(id);
        let name = escape_text(&class.name);
        writeln!(out, "<li><a href=\"#class_{name}\">{name}</a>")?;
        if !class.children.is_empty() {
            writeln!(out, "<ul>")?;
            for &child in &class.children {
                Self::write_class_tree(docs, child, out)?;
            }
            writeln!(out, "</ul>")?;
        }
        writeln!(out, "</li>")
    }

    fn write_class(docs: &ScriptDocs, id: ClassId, out: &mut dyn Write) -> io::Result<()> {
        let class = docs.class(id);
        let name = escape_text(&class.name);

        writeln!(out, "<section class=\"class\">")?;
        writeln!(out, "<h2 id=\"class_{name}\">{name}</h2>")?;
        writeln!(out, "<div>{}</div>", escape_description(&class.description))?;
        if let Some(parent) = docs.parent_of(id) {
            let parent = escape_text(&parent.name);
            writeln!(out, "<p>Subclass of: <a href=\"#class_{parent}\">{parent}</a></p>")?;
        }
        if !class.create {
            writeln!(out, "<p>Cannot be created from scripts.</p>")?;
        }

        writeln!(out, "<dl>")?;
        for function in &class.functions {
            writeln!(out, "<dt>{}</dt>", function_heading(class, function))?;
            writeln!(out, "<dd>{}</dd>", escape_description(&function.description))?;
        }
        for member in &class.members {
            writeln!(out, "<dt>{name}:{}</dt>", escape_text(&member.name))?;
            writeln!(out, "<dd>{}</dd>", escape_description(&member.description))?;
        }
        for callback in &class.callbacks {
            writeln!(out, "<dt>{name}:{} [callback]</dt>", escape_text(callback))?;
        }
        writeln!(out, "</dl>")?;
        writeln!(out, "</section>")
    }
}

fn function_heading(class: &ScriptClass, function: &ScriptFunction) -> String {
    let prefix = format!("{}:{}", escape_text(&class.name), escape_text(&function.name));
    match &function.parameters {
        Some(params) => format!("{prefix}({})", escape_text(params)),
        None => format!("{prefix} {NOT_FOUND_MARKER}"),
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, docs: &ScriptDocs, out: &mut dyn Write) -> io::Result<()> {
        let title = escape_text(&self.options.title);
        writeln!(out, "<!doctype html>")?;
        writeln!(
            out,
            "<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{title}</title></head>"
        )?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{title}</h1>")?;

        writeln!(out, "<section>")?;
        writeln!(out, "<h2>Objects</h2>")?;
        writeln!(out, "<ul>")?;
        for (id, _) in docs.roots() {
            Self::write_class_tree(docs, id, out)?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</section>")?;

        writeln!(out, "<section>")?;
        writeln!(out, "<h2>Functions</h2>")?;
        writeln!(out, "<dl>")?;
        for function in docs.functions() {
            writeln!(out, "<dt>{}</dt>", escape_text(&function.name))?;
            writeln!(out, "<dd>{}</dd>", escape_description(&function.description))?;
        }
        writeln!(out, "</dl>")?;
        writeln!(out, "</section>")?;

        for (id, _) in docs.classes() {
            Self::write_class(docs, id, out)?;
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}
