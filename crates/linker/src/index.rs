use scriptdoc_model::{ClassId, ScriptDocs, SignatureTable};
use std::collections::HashMap;

/// `(owner, method) -> parameters`, built once from the signature table.
///
/// When several entries share a key the first one in table order wins.
#[derive(Debug, Default)]
pub struct SignatureIndex<'a> {
    by_key: HashMap<(&'a str, &'a str), &'a str>,
}

impl<'a> SignatureIndex<'a> {
    pub fn build(table: &'a SignatureTable) -> Self {
        let mut by_key = HashMap::with_capacity(table.len());
        for sig in table.iter() {
            by_key
                .entry((sig.owner.as_str(), sig.method.as_str()))
                .or_insert(sig.parameters.as_str());
        }
        Self { by_key }
    }

    pub fn get(&self, owner: &str, method: &str) -> Option<&'a str> {
        self.by_key.get(&(owner, method)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Class name -> id. The first class declared under a name owns it.
#[derive(Debug, Default)]
pub struct ClassIndex {
    by_name: HashMap<String, ClassId>,
    duplicates: Vec<String>,
}

impl ClassIndex {
    pub fn build(docs: &ScriptDocs) -> Self {
        let mut index = Self::default();
        for (id, class) in docs.classes() {
            if index.by_name.contains_key(&class.name) {
                index.duplicates.push(class.name.clone());
            } else {
                index.by_name.insert(class.name.clone(), id);
            }
        }
        index
    }

    pub fn get(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Names declared more than once, once per extra declaration.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}
