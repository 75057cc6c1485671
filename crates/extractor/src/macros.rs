use once_cell::sync::Lazy;
use regex::Regex;

static REGISTER_MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"REGISTER_SCRIPT_(CLASS_NO_CREATE|CLASS_FUNCTION|CLASS_CALLBACK|CLASS|SUBCLASS_NO_CREATE|SUBCLASS|FUNCTION)\(([^)]*)\)",
    )
    .expect("registration macro pattern is valid")
});

/// A recognised `REGISTER_SCRIPT_*` invocation with trimmed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationMacro {
    Class { name: String },
    ClassNoCreate { name: String },
    Subclass { name: String, parent: String },
    SubclassNoCreate { name: String, parent: String },
    ClassFunction { origin: String, name: String },
    ClassCallback { origin: String, name: String },
    Function { name: String },
}

impl DeclarationMacro {
    /// Every macro on `line`, left to right. Unknown macros and two-argument
    /// macros missing their comma are skipped.
    pub fn parse_line(line: &str) -> Vec<Self> {
        REGISTER_MACRO
            .captures_iter(line)
            .filter_map(|caps| Self::from_parts(&caps[1], &caps[2]))
            .collect()
    }

    fn from_parts(kind: &str, args: &str) -> Option<Self> {
        let one = || args.trim().to_string();
        let two = || {
            args.split_once(',')
                .map(|(first, second)| (first.trim().to_string(), second.trim().to_string()))
        };

        Some(match kind {
            "CLASS" => Self::Class { name: one() },
            "CLASS_NO_CREATE" => Self::ClassNoCreate { name: one() },
            "SUBCLASS" => {
                let (name, parent) = two()?;
                Self::Subclass { name, parent }
            }
            "SUBCLASS_NO_CREATE" => {
                let (name, parent) = two()?;
                Self::SubclassNoCreate { name, parent }
            }
            "CLASS_FUNCTION" => {
                let (origin, name) = two()?;
                Self::ClassFunction { origin, name }
            }
            "CLASS_CALLBACK" => {
                let (origin, name) = two()?;
                Self::ClassCallback { origin, name }
            }
            "FUNCTION" => Self::Function { name: one() },
            _ => return None,
        })
    }

    pub const fn macro_name(&self) -> &'static str {
        match self {
            Self::Class { .. } => "REGISTER_SCRIPT_CLASS",
            Self::ClassNoCreate { .. } => "REGISTER_SCRIPT_CLASS_NO_CREATE",
            Self::Subclass { .. } => "REGISTER_SCRIPT_SUBCLASS",
            Self::SubclassNoCreate { .. } => "REGISTER_SCRIPT_SUBCLASS_NO_CREATE",
            Self::ClassFunction { .. } => "REGISTER_SCRIPT_CLASS_FUNCTION",
            Self::ClassCallback { .. } => "REGISTER_SCRIPT_CLASS_CALLBACK",
            Self::Function { .. } => "REGISTER_SCRIPT_FUNCTION",
        }
    }
}
