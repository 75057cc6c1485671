/// A method signature lifted from a header file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Class (or other owner) the method was found on.
    pub owner: String,
    pub method: String,
    /// Raw text between the parentheses.
    pub parameters: String,
}

impl Signature {
    pub fn new(
        owner: impl Into<String>,
        method: impl Into<String>,
        parameters: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            method: method.into(),
            parameters: parameters.into(),
        }
    }
}

/// Every signature captured across all headers. Order carries no meaning and
/// duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureTable {
    entries: Vec<Signature>,
}

impl SignatureTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, signature: Signature) {
        self.entries.push(signature);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Signature> for SignatureTable {
    fn extend<T: IntoIterator<Item = Signature>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Signature> for SignatureTable {
    fn from_iter<T: IntoIterator<Item = Signature>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
