use scriptdoc_model::{ScriptClass, ScriptFunction, ScriptMember};

pub const IS_VALID: &str = "isValid";
pub const DESTROY: &str = "destroy";
pub const TYPE_NAME: &str = "typeName";

const IS_VALID_DESCRIPTION: &str = "Check if this is still looking at a valid object. Returns false when the objects that this variable references is destroyed.";
const DESTROY_DESCRIPTION: &str = "Removes this object from the game.";
const TYPE_NAME_DESCRIPTION: &str = r#"Returns the class name of this object, this is not a function, but a direct member: if object.typeName == "Mine" then print("MINE!") end"#;

/// Give a root class the members every script object has.
///
/// Entries already present are left alone, so calling this twice is a no-op.
pub fn synthesize_root_members(class: &mut ScriptClass) {
    for (name, description) in [(IS_VALID, IS_VALID_DESCRIPTION), (DESTROY, DESTROY_DESCRIPTION)] {
        if class.function(name).is_none() {
            class.add_function(
                ScriptFunction::new(name)
                    .with_description(description)
                    .with_parameters(""),
            );
        }
    }

    if class.member(TYPE_NAME).is_none() {
        class.add_member(ScriptMember::new(TYPE_NAME).with_description(TYPE_NAME_DESCRIPTION));
    }
}
