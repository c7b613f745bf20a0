//! Lookup of scheme implementations by kind

use std::collections::HashMap;
use std::sync::Arc;

use crate::scheme::schemes::{DottedScheme, MonotonicScheme, PerlScheme};
use crate::scheme::traits::VersionScheme;
use crate::scheme::types::SchemeKind;

/// Create the scheme implementation for a kind
pub fn scheme_for(kind: SchemeKind) -> Arc<dyn VersionScheme> {
    match kind {
        SchemeKind::Monotonic => Arc::new(MonotonicScheme::new()),
        SchemeKind::Dotted => Arc::new(DottedScheme::new()),
        SchemeKind::Perl => Arc::new(PerlScheme::new()),
    }
}

/// Create the default set of schemes for all supported kinds
pub fn create_default_schemes() -> HashMap<SchemeKind, Arc<dyn VersionScheme>> {
    SchemeKind::ALL
        .into_iter()
        .map(|kind| (kind, scheme_for(kind)))
        .collect()
}
