use crate::docs::ClassId;
use serde::Serialize;

/// A callable exposed to scripts, either on a class or as a free function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptFunction {
    pub name: String,
    pub description: String,
    /// Class named in the registration macro; may be a base of the class
    /// that lists the function.
    pub origin_class: Option<String>,
    /// Raw parameter text from the header. `None` until linked.
    pub parameters: Option<String>,
}

impl ScriptFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_origin_class(mut self, origin_class: impl Into<String>) -> Self {
        self.origin_class = Some(origin_class.into());
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    /// Whether the linker found a signature for this function.
    pub const fn has_signature(&self) -> bool {
        self.parameters.is_some()
    }
}

/// A data field readable from scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptMember {
    pub name: String,
    pub description: String,
    pub origin_class: Option<String>,
}

impl ScriptMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A documented class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptClass {
    pub name: String,
    /// Parent name as written in the subclass macro, before linking.
    pub parent_name: Option<String>,
    /// Resolved parent, set by the linker.
    pub parent: Option<ClassId>,
    /// Classes whose resolved parent is this class.
    pub children: Vec<ClassId>,
    pub description: String,
    /// False for the `_NO_CREATE` registration variants.
    pub create: bool,
    pub functions: Vec<ScriptFunction>,
    pub members: Vec<ScriptMember>,
    pub callbacks: Vec<String>,
}

impl ScriptClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
            parent: None,
            children: Vec::new(),
            description: String::new(),
            create: true,
            functions: Vec::new(),
            members: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parent_name(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_name = Some(parent_name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    pub fn add_function(&mut self, function: ScriptFunction) -> &mut ScriptFunction {
        self.functions.push(function);
        let last = self.functions.len() - 1;
        &mut self.functions[last]
    }

    pub fn add_member(&mut self, member: ScriptMember) -> &mut ScriptMember {
        self.members.push(member);
        let last = self.members.len() - 1;
        &mut self.members[last]
    }

    pub fn add_callback(&mut self, name: impl Into<String>) {
        self.callbacks.push(name.into());
    }

    pub fn function(&self, name: &str) -> Option<&ScriptFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn member(&self, name: &str) -> Option<&ScriptMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// True when no parent was declared at all (as opposed to one that
    /// failed to resolve).
    pub const fn is_declared_root(&self) -> bool {
        self.parent_name.is_none()
    }
}
