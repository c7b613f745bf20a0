//! Versioning scheme layer
//!
//! This module defines the contract shared by all versioning schemes and the
//! concrete scheme implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐
//! │  Registry   │────▶│ VersionScheme │◀────│   Schemes   │
//! │ (by kind)   │     │  (contract)   │     │ (monotonic, │
//! └─────────────┘     └───────────────┘     │ dotted,perl)│
//!                             │             └─────────────┘
//!                             ▼
//!                     ┌───────────────┐
//!                     │   Segment     │
//!                     │ (part, step)  │
//!                     └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`traits`]: The `VersionScheme` contract
//! - [`schemes`]: Concrete scheme implementations
//! - [`registry`]: Lookup of scheme implementations by [`types::SchemeKind`]
//! - [`segment`]: Part resolution and step arithmetic shared by all schemes
//! - [`error`]: Error type returned by scheme operations
//! - [`types`]: Common types like `SchemeKind`

pub mod error;
pub mod registry;
pub mod schemes;
pub mod segment;
pub mod traits;
pub mod types;
