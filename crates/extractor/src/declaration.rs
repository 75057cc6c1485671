use crate::is_directive;
use crate::macros::DeclarationMacro;
use scriptdoc_collector::{read_source, SourceSet};
use scriptdoc_model::{
    ClassId, Diagnostic, Diagnostics, ScriptClass, ScriptDocs, ScriptFunction,
};
use std::path::{Path, PathBuf};

const DOC_MARKER: &str = "///";

/// Output of the declaration pass.
#[derive(Debug, Default)]
pub struct Extraction {
    pub docs: ScriptDocs,
    pub diagnostics: Diagnostics,
}

/// Documentation text waiting for the next declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum PendingDescription {
    #[default]
    Empty,
    Accumulating(String),
}

impl PendingDescription {
    fn push_line(&mut self, text: &str) {
        match self {
            Self::Empty => *self = Self::Accumulating(text.to_string()),
            Self::Accumulating(buf) => {
                buf.push('\n');
                buf.push_str(text);
            }
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Accumulating(buf) => buf,
        }
    }

    fn clear(&mut self) {
        *self = Self::Empty;
    }
}

/// Per-file scan state. Nothing carries over between files.
struct FileScan<'a> {
    path: &'a Path,
    description: PendingDescription,
    current_class: Option<ClassId>,
}

/// Builds the declaration list from `///` blocks and registration macros.
#[derive(Debug, Default)]
pub struct DeclarationExtractor {
    docs: ScriptDocs,
    diagnostics: Diagnostics,
}

impl DeclarationExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every file in `sources`, in set order.
    pub fn extract(sources: &SourceSet) -> Extraction {
        let mut extractor = Self::new();
        for path in sources.iter() {
            match read_source(path) {
                Ok(source) => extractor.scan(path, &source),
                Err(err) => log::debug!("{err}"),
            }
        }
        let extraction = extractor.finish();
        log::info!(
            "Extracted {} declarations ({} classes)",
            extraction.docs.len(),
            extraction.docs.classes().count()
        );
        extraction
    }

    /// Scan one file's text. `path` is only used for diagnostics.
    pub fn scan(&mut self, path: &Path, source: &str) {
        let mut state = FileScan {
            path,
            description: PendingDescription::Empty,
            current_class: None,
        };

        for (idx, line) in source.lines().enumerate() {
            if is_directive(line) {
                continue;
            }

            if let Some(pos) = line.find(DOC_MARKER) {
                let text = &line[pos + DOC_MARKER.len()..];
                state
                    .description
                    .push_line(text.strip_prefix(' ').unwrap_or(text));
                continue;
            }

            for decl in DeclarationMacro::parse_line(line) {
                self.apply(&mut state, idx + 1, decl);
            }
            state.description.clear();
        }
    }

    pub fn finish(self) -> Extraction {
        Extraction {
            docs: self.docs,
            diagnostics: self.diagnostics,
        }
    }

    fn apply(&mut self, state: &mut FileScan<'_>, line: usize, decl: DeclarationMacro) {
        let description = state.description.text();
        match decl {
            DeclarationMacro::Class { name } => {
                state.current_class = Some(self.push_class(ScriptClass::new(name), description));
            }
            DeclarationMacro::ClassNoCreate { name } => {
                let class = ScriptClass::new(name).with_create(false);
                state.current_class = Some(self.push_class(class, description));
            }
            DeclarationMacro::Subclass { name, parent } => {
                let class = ScriptClass::new(name).with_parent_name(parent);
                state.current_class = Some(self.push_class(class, description));
            }
            DeclarationMacro::SubclassNoCreate { name, parent } => {
                let class = ScriptClass::new(name)
                    .with_parent_name(parent)
                    .with_create(false);
                state.current_class = Some(self.push_class(class, description));
            }
            DeclarationMacro::ClassFunction { ref origin, ref name } => {
                let Some(id) = state.current_class else {
                    self.orphan(state.path, line, &decl, name);
                    return;
                };
                self.docs.class_mut(id).add_function(
                    ScriptFunction::new(name.as_str())
                        .with_description(description)
                        .with_origin_class(origin.as_str()),
                );
            }
            DeclarationMacro::ClassCallback { ref name, .. } => {
                let Some(id) = state.current_class else {
                    self.orphan(state.path, line, &decl, name);
                    return;
                };
                self.docs.class_mut(id).add_callback(name.as_str());
            }
            DeclarationMacro::Function { name } => {
                state.current_class = None;
                self.docs
                    .push_function(ScriptFunction::new(name).with_description(description));
            }
        }
    }

    fn push_class(&mut self, class: ScriptClass, description: &str) -> ClassId {
        self.docs.push_class(class.with_description(description))
    }

    fn orphan(&mut self, path: &Path, line: usize, decl: &DeclarationMacro, name: &str) {
        self.diagnostics.push(Diagnostic::OrphanClassMember {
            path: PathBuf::from(path),
            line,
            macro_name: decl.macro_name().to_string(),
            name: name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> Extraction {
        let mut extractor = DeclarationExtractor::new();
        extractor.scan(Path::new("test.cpp"), source);
        extractor.finish()
    }

    #[test]
    fn pending_description_transitions() {
        let mut pending = PendingDescription::default();
        assert_eq!(pending.text(), "");
        pending.push_line("first");
        pending.push_line("");
        pending.push_line("third");
        assert_eq!(pending, PendingDescription::Accumulating("first\n\nthird".into()));
        pending.clear();
        assert_eq!(pending, PendingDescription::Empty);
    }

    #[test]
    fn description_attaches_to_next_class() {
        let out = scan("/// A mine.\n/// Explodes.\nREGISTER_SCRIPT_SUBCLASS(Mine, SpaceObject)\n");
        let (_, mine) = out.docs.find_class("Mine").unwrap();
        assert_eq!(mine.description, "A mine.\nExplodes.");
        assert_eq!(mine.parent_name.as_deref(), Some("SpaceObject"));
        assert!(mine.create);
    }

    #[test]
    fn intervening_line_discards_description() {
        let out = scan("/// Lost text.\nint unrelated = 0;\nREGISTER_SCRIPT_CLASS(Foo)\n");
        let (_, foo) = out.docs.find_class("Foo").unwrap();
        assert_eq!(foo.description, "");
    }

    #[test]
    fn blank_line_discards_description() {
        let out = scan("/// Lost text.\n\nREGISTER_SCRIPT_FUNCTION(getObjectsInRadius)\n");
        assert_eq!(out.docs.functions().next().unwrap().description, "");
    }

    #[test]
    fn directive_lines_keep_description() {
        let out = scan("/// Kept.\n#ifdef DEBUG\nREGISTER_SCRIPT_CLASS(Foo)\n");
        assert_eq!(out.docs.find_class("Foo").unwrap().1.description, "Kept.");
    }

    #[test]
    fn class_functions_join_current_class_with_origin_tag() {
        let source = "\
REGISTER_SCRIPT_SUBCLASS_NO_CREATE(SpaceShip, ShipTemplateBasedObject)
  /// Set the warp drive.
  REGISTER_SCRIPT_CLASS_FUNCTION(SpaceShip, setWarpDrive);
  REGISTER_SCRIPT_CLASS_FUNCTION(ShipTemplateBasedObject, setHull);
  REGISTER_SCRIPT_CLASS_CALLBACK(SpaceShip, onDestroyed);
";
        let out = scan(source);
        let (_, ship) = out.docs.find_class("SpaceShip").unwrap();
        assert!(!ship.create);
        assert_eq!(ship.functions.len(), 2);
        assert_eq!(ship.functions[0].name, "setWarpDrive");
        assert_eq!(ship.functions[0].description, "Set the warp drive.");
        assert_eq!(ship.functions[0].origin_class.as_deref(), Some("SpaceShip"));
        assert_eq!(
            ship.functions[1].origin_class.as_deref(),
            Some("ShipTemplateBasedObject")
        );
        assert_eq!(ship.functions[1].parameters, None);
        assert_eq!(ship.callbacks, vec!["onDestroyed"]);
    }

    #[test]
    fn free_function_closes_class_context() {
        let source = "\
REGISTER_SCRIPT_CLASS(Foo)
/// Global helper.
REGISTER_SCRIPT_FUNCTION(globalHelper);
REGISTER_SCRIPT_CLASS_FUNCTION(Foo, lost);
";
        let out = scan(source);
        assert_eq!(out.docs.find_class("Foo").unwrap().1.functions.len(), 0);
        let helper = out.docs.functions().next().unwrap();
        assert_eq!(helper.name, "globalHelper");
        assert_eq!(helper.description, "Global helper.");
        assert_eq!(helper.origin_class, None);
        assert_eq!(out.diagnostics.len(), 1);
        assert!(matches!(
            out.diagnostics.iter().next(),
            Some(Diagnostic::OrphanClassMember { line: 4, .. })
        ));
    }

    #[test]
    fn class_context_resets_between_files() {
        let mut extractor = DeclarationExtractor::new();
        extractor.scan(Path::new("a.cpp"), "REGISTER_SCRIPT_CLASS(Foo)\n");
        extractor.scan(
            Path::new("b.cpp"),
            "REGISTER_SCRIPT_CLASS_CALLBACK(Foo, onTick)\n",
        );
        let out = extractor.finish();
        assert!(out.docs.find_class("Foo").unwrap().1.callbacks.is_empty());
        assert_eq!(out.diagnostics.len(), 1);
    }

    #[test]
    fn declarations_keep_scan_order() {
        let source = "\
REGISTER_SCRIPT_FUNCTION(first)
REGISTER_SCRIPT_CLASS_NO_CREATE(Second)
REGISTER_SCRIPT_FUNCTION(third)
";
        let out = scan(source);
        let names: Vec<_> = out.docs.declarations().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["first", "Second", "third"]);
    }
}
