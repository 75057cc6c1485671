use once_cell::sync::Lazy;
use regex::Regex;

static INCLUDE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^# *include *[<"](.*)[>"]$"#).expect("include directive pattern is valid")
});

/// Targets of every `#include "..."` / `#include <...>` line, in file order.
pub fn include_targets(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| INCLUDE_DIRECTIVE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
