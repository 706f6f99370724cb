//! Replacement rules derived from a project name.
//!
//! Every spelling of the placeholder that appears in the template gets one
//! literal `(old, new)` pair. Rules are applied in order, each as a single
//! left-to-right pass over the buffer left by the previous rule.
//!
//! ```text
//! cpp-template                                  -> my-project
//! cpp_template                                  -> my_project
//! CPP-TEMPLATE                                  -> MY-PROJECT
//! CPP_TEMPLATE                                  -> MY_PROJECT
//! CppTemplate                                   -> MyProject
//! cpp_template                                  -> my_project   (lower-cased)
//! https://github.com/your-username/cpp-template -> https://github.com/your-username/my-project
//! ```

use crate::template::{BASE_TOKEN, repository_url};
use std::fmt;

/// A literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    pub old: String,
    pub new: String,
}

impl ReplacementRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Replaces every occurrence of `old` in `text`.
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.old, &self.new)
    }
}

impl fmt::Display for ReplacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.old, self.new)
    }
}

/// Derives the ordered rule list for `name`.
///
/// `name` must already be validated.
pub fn derive_rules(name: &str) -> Vec<ReplacementRule> {
    vec![
        ReplacementRule::new(BASE_TOKEN, name),
        ReplacementRule::new(snake(BASE_TOKEN), snake(name)),
        ReplacementRule::new(BASE_TOKEN.to_uppercase(), name.to_uppercase()),
        ReplacementRule::new(
            snake(BASE_TOKEN).to_uppercase(),
            snake(name).to_uppercase(),
        ),
        ReplacementRule::new(camel(BASE_TOKEN), camel(name)),
        // Same key as the snake rule; whichever runs first consumes the matches.
        ReplacementRule::new(snake(BASE_TOKEN), snake(name).to_lowercase()),
        ReplacementRule::new(repository_url(BASE_TOKEN), repository_url(name)),
    ]
}

/// Applies `rules` to `text` in order.
pub fn apply_rules(text: &str, rules: &[ReplacementRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |buffer, rule| rule.apply(&buffer))
}

fn snake(name: &str) -> String {
    name.replace('-', "_")
}

/// `my-awesome_lib` -> `MyAwesomeLib`. Only the first character of each
/// segment changes case.
fn camel(name: &str) -> String {
    name.split(['-', '_'])
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
