use crate::entity::{ScriptClass, ScriptFunction};
use std::fmt;

/// Index of a class within a [`ScriptDocs`] declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

impl ClassId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A top-level documented entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(ScriptClass),
    Function(ScriptFunction),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => &class.name,
            Self::Function(function) => &function.name,
        }
    }

    pub const fn as_class(&self) -> Option<&ScriptClass> {
        match self {
            Self::Class(class) => Some(class),
            Self::Function(_) => None,
        }
    }

    pub const fn as_function(&self) -> Option<&ScriptFunction> {
        match self {
            Self::Function(function) => Some(function),
            Self::Class(_) => None,
        }
    }
}

/// The declaration list: every top-level entity in scan order.
///
/// Entities are only ever appended, so a [`ClassId`] handed out by
/// [`ScriptDocs::push_class`] stays valid for the life of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptDocs {
    declarations: Vec<Declaration>,
}

impl ScriptDocs {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    pub fn push_class(&mut self, class: ScriptClass) -> ClassId {
        let id = ClassId(self.declarations.len());
        self.declarations.push(Declaration::Class(class));
        id
    }

    pub fn push_function(&mut self, function: ScriptFunction) {
        self.declarations.push(Declaration::Function(function));
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Panics if `id` did not come from this list.
    pub fn class(&self, id: ClassId) -> &ScriptClass {
        match &self.declarations[id.0] {
            Declaration::Class(class) => class,
            Declaration::Function(_) => unreachable!("ClassId always points at a class"),
        }
    }

    /// Panics if `id` did not come from this list.
    pub fn class_mut(&mut self, id: ClassId) -> &mut ScriptClass {
        match &mut self.declarations[id.0] {
            Declaration::Class(class) => class,
            Declaration::Function(_) => unreachable!("ClassId always points at a class"),
        }
    }

    pub fn class_ids(&self) -> Vec<ClassId> {
        self.classes().map(|(id, _)| id).collect()
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ScriptClass)> {
        self.declarations
            .iter()
            .enumerate()
            .filter_map(|(idx, decl)| decl.as_class().map(|class| (ClassId(idx), class)))
    }

    pub fn functions(&self) -> impl Iterator<Item = &ScriptFunction> {
        self.declarations.iter().filter_map(Declaration::as_function)
    }

    /// Classes rendered at the top of the hierarchy: no resolved parent.
    pub fn roots(&self) -> impl Iterator<Item = (ClassId, &ScriptClass)> {
        self.classes().filter(|(_, class)| class.parent.is_none())
    }

    pub fn find_class(&self, name: &str) -> Option<(ClassId, &ScriptClass)> {
        self.classes().find(|(_, class)| class.name == name)
    }

    pub fn parent_of(&self, id: ClassId) -> Option<&ScriptClass> {
        self.class(id).parent.map(|parent| self.class(parent))
    }

    pub fn children_of(&self, id: ClassId) -> impl Iterator<Item = &ScriptClass> {
        self.class(id).children.iter().map(|&child| self.class(child))
    }

    /// `{Name(Parent):fn:fn}` summary used in log lines.
    pub fn display_class(&self, id: ClassId) -> ClassDisplay<'_> {
        ClassDisplay { docs: self, id }
    }
}

pub struct ClassDisplay<'a> {
    docs: &'a ScriptDocs,
    id: ClassId,
}

impl fmt::Display for ClassDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.docs.class(self.id);
        write!(f, "{{{}", class.name)?;
        if let Some(parent) = self.docs.parent_of(self.id) {
            write!(f, "({})", parent.name)?;
        }
        for function in &class.functions {
            write!(f, ":{}", function.name)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ScriptFunction;
    use pretty_assertions::assert_eq;

    fn sample() -> (ScriptDocs, ClassId, ClassId) {
        let mut docs = ScriptDocs::new();
        let base = docs.push_class(ScriptClass::new("SpaceObject"));
        docs.push_function(ScriptFunction::new("getPlayerShip"));
        let ship = docs.push_class(ScriptClass::new("SpaceShip").with_parent_name("SpaceObject"));
        (docs, base, ship)
    }

    #[test]
    fn class_ids_skip_free_functions() {
        let (docs, base, ship) = sample();
        assert_eq!(docs.class_ids(), vec![base, ship]);
        assert_eq!(ship.index(), 2);
        assert_eq!(docs.functions().count(), 1);
        assert_eq!(docs.len(), 3);
    }

    #[test]
    fn roots_follow_resolved_parent_only() {
        let (mut docs, base, ship) = sample();
        let roots: Vec<_> = docs.roots().map(|(_, c)| c.name.clone()).collect();
        assert_eq!(roots, vec!["SpaceObject", "SpaceShip"]);

        docs.class_mut(ship).parent = Some(base);
        docs.class_mut(base).children.push(ship);
        let roots: Vec<_> = docs.roots().map(|(_, c)| c.name.clone()).collect();
        assert_eq!(roots, vec!["SpaceObject"]);
        assert_eq!(docs.parent_of(ship).map(|c| c.name.as_str()), Some("SpaceObject"));
        assert_eq!(docs.children_of(base).count(), 1);
    }

    #[test]
    fn display_class_lists_parent_and_functions() {
        let (mut docs, base, ship) = sample();
        docs.class_mut(ship).parent = Some(base);
        docs.class_mut(ship)
            .add_function(ScriptFunction::new("setHull"));
        assert_eq!(docs.display_class(ship).to_string(), "{SpaceShip(SpaceObject):setHull}");
    }

    #[test]
    fn find_class_by_name() {
        let (docs, _, ship) = sample();
        assert_eq!(docs.find_class("SpaceShip").map(|(id, _)| id), Some(ship));
        assert!(docs.find_class("getPlayerShip").is_none());
    }
}
