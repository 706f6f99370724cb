//! Placeholder rewriting: rule derivation, the replacement pass over the
//! target files, and the include directory relocation.

pub mod engine;
pub mod relocate;
pub mod rules;

pub use engine::{FileOutcome, RunStats, apply_all, apply_all_with};
pub use relocate::{DirectoryOutcome, RelocationReport, relocate};
pub use rules::{ReplacementRule, apply_rules, derive_rules};
