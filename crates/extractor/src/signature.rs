use crate::is_directive;
use once_cell::sync::Lazy;
use regex::Regex;
use scriptdoc_collector::{read_source, SourceSet};
use scriptdoc_model::{Signature, SignatureTable};

static OUT_OF_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z0-9]+)::([a-zA-Z0-9]+)\(([^)]*)\)")
        .expect("out-of-class signature pattern is valid")
});

static CLASS_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^class ([a-zA-Z0-9]+)").expect("class pattern is valid"));

static IN_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ *([a-zA-Z0-9 :<>]+) +([a-zA-Z0-9]+)\(([^)]*)\)")
        .expect("in-class signature pattern is valid")
});

/// Collects method signatures from header files.
///
/// The "current class" is whatever `class Name` line was seen last in the
/// file; it is never closed, so methods of a later non-class scope are
/// attributed to it.
#[derive(Debug, Default)]
pub struct SignatureExtractor {
    current_class: Option<String>,
}

impl SignatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every header in `sources`.
    pub fn extract(sources: &SourceSet) -> SignatureTable {
        let mut table = SignatureTable::new();
        for path in sources.headers() {
            match read_source(path) {
                Ok(source) => {
                    let found = Self::new().scan(&source);
                    log::debug!("{}: {} signatures", path.display(), found.len());
                    table.extend(found);
                }
                Err(err) => log::debug!("{err}"),
            }
        }
        log::info!("Extracted {} signatures", table.len());
        table
    }

    /// Scan one header's text.
    pub fn scan(&mut self, source: &str) -> Vec<Signature> {
        let mut found = Vec::new();
        for line in source.lines() {
            self.scan_line(line, &mut found);
        }
        found
    }

    fn scan_line(&mut self, line: &str, found: &mut Vec<Signature>) {
        if is_directive(line) {
            return;
        }

        if let Some(caps) = OUT_OF_CLASS.captures(line) {
            found.push(Signature::new(&caps[1], &caps[2], &caps[3]));
        }

        let class_head = CLASS_START.captures(line);
        if let Some(caps) = &class_head {
            self.current_class = Some(caps[1].to_string());
        }

        let Some(class) = &self.current_class else {
            return;
        };
        // Whole line first; a `class Foo { int bar(int x); };` head falls back
        // to the body after its opening brace.
        let caps = IN_CLASS.captures(line).or_else(|| {
            class_head
                .as_ref()
                .and_then(|_| line.split_once('{'))
                .and_then(|(_, body)| IN_CLASS.captures(body))
        });
        if let Some(caps) = caps {
            if !caps[2].is_empty() {
                found.push(Signature::new(class.as_str(), &caps[2], &caps[3]));
            }
        }
    }
}
