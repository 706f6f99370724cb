//! Command implementations.

pub mod replace;

pub use replace::{ReplaceArgs, Replacer, RunSummary, execute};
