//! Versioning scheme contract

use std::cmp::Ordering;

use crate::config::{BumpOptions, NormalizeOptions};
use crate::scheme::error::SchemeError;
use crate::scheme::types::SchemeKind;

/// Trait implemented by every versioning scheme
///
/// Operations are pure: they only read their arguments, and identical inputs
/// always produce identical results. Version strings are validated before any
/// option is inspected, so an invalid version always reports
/// [`SchemeError::InvalidVersion`].
pub trait VersionScheme: Send + Sync {
    /// Returns the kind of scheme this implementation handles
    fn kind(&self) -> SchemeKind;

    /// Check whether `version` matches the scheme's grammar
    fn is_valid(&self, version: &str) -> bool;

    /// Render `version` in the scheme's canonical form
    fn normalize(&self, version: &str, opts: &NormalizeOptions) -> Result<String, SchemeError>;

    /// Three-way comparison of two versions
    fn compare(&self, v1: &str, v2: &str) -> Result<Ordering, SchemeError>;

    /// Increment (or decrement, for a negative `num`) one segment of `version`
    ///
    /// See [`BumpOptions`] for the meaning of `num`, `part` and `reset_smaller`.
    fn bump(&self, version: &str, opts: &BumpOptions) -> Result<String, SchemeError>;
}
