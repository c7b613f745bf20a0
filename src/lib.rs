//! Pluggable versioning schemes.
//!
//! Every scheme implements [`scheme::traits::VersionScheme`], which validates,
//! normalizes, compares and bumps version strings. Three schemes are provided:
//!
//! - [`scheme::schemes::MonotonicScheme`]: `COMPATIBILITY.RELEASE[.0]`
//! - [`scheme::schemes::DottedScheme`]: any number of dotted non-negative integers
//! - [`scheme::schemes::PerlScheme`]: Perl-style dotted-decimal versions
//!
//! ```
//! use versioning_scheme::config::BumpOptions;
//! use versioning_scheme::scheme::registry::scheme_for;
//! use versioning_scheme::scheme::types::SchemeKind;
//!
//! let dotted = scheme_for(SchemeKind::Dotted);
//! let next = dotted.bump("1.2.3", &BumpOptions::default().with_part(-2)).unwrap();
//! assert_eq!(next, "1.3.0");
//! ```

pub mod config;
pub mod scheme;
