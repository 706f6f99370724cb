//! File system helpers.
//!
//! Provides the backup snapshot taken before any target file is rewritten.

pub mod backup;

pub use backup::snapshot;
