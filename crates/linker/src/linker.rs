use crate::defaults::synthesize_root_members;
use crate::index::{ClassIndex, SignatureIndex};
use scriptdoc_model::{Diagnostic, Diagnostics, ScriptDocs, SignatureTable};

/// Link `docs` against `signatures` with both passes, in order.
pub fn link(docs: &mut ScriptDocs, signatures: &SignatureTable) -> Diagnostics {
    Linker::new(signatures).link(docs)
}

/// Runs the signature and parent passes over a completed declaration list.
pub struct Linker<'a> {
    signatures: SignatureIndex<'a>,
}

impl<'a> Linker<'a> {
    pub fn new(signatures: &'a SignatureTable) -> Self {
        Self {
            signatures: SignatureIndex::build(signatures),
        }
    }

    /// Signature linking, then parent linking. Safe to call again on an
    /// already linked list.
    pub fn link(&self, docs: &mut ScriptDocs) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.link_signatures(docs, &mut diagnostics);
        Self::link_parents(docs, &mut diagnostics);
        log::info!(
            "Linked {} classes against {} signatures ({} diagnostics)",
            docs.classes().count(),
            self.signatures.len(),
            diagnostics.len()
        );
        diagnostics
    }

    /// Give every class function whose `(origin class, name)` has a header
    /// signature its parameter text.
    pub fn link_signatures(&self, docs: &mut ScriptDocs, diagnostics: &mut Diagnostics) {
        for id in docs.class_ids() {
            let class = docs.class_mut(id);
            for function in &mut class.functions {
                let Some(origin) = function.origin_class.as_deref() else {
                    continue;
                };
                if let Some(parameters) = self.signatures.get(origin, &function.name) {
                    function.parameters = Some(parameters.to_string());
                }
            }

            for function in class.functions.iter().filter(|f| !f.has_signature()) {
                diagnostics.push(Diagnostic::MissingSignature {
                    class: class.name.clone(),
                    function: function.name.clone(),
                });
            }
        }
    }

    /// Resolve parent names, record children, and fill in declared roots.
    pub fn link_parents(docs: &mut ScriptDocs, diagnostics: &mut Diagnostics) {
        let index = ClassIndex::build(docs);
        for name in index.duplicates() {
            diagnostics.push(Diagnostic::DuplicateClass { name: name.clone() });
        }

        for id in docs.class_ids() {
            let Some(parent_name) = docs.class(id).parent_name.clone() else {
                synthesize_root_members(docs.class_mut(id));
                continue;
            };

            match index.get(&parent_name) {
                Some(parent) => {
                    docs.class_mut(id).parent = Some(parent);
                    let children = &mut docs.class_mut(parent).children;
                    if !children.contains(&id) {
                        children.push(id);
                    }
                }
                None => {
                    log::debug!("Parent not found for: {}", docs.display_class(id));
                    diagnostics.push(Diagnostic::UnresolvedParent {
                        class: docs.class(id).name.clone(),
                        parent: parent_name,
                    });
                }
            }
        }
    }
}
