//! Concrete versioning schemes

pub mod dotted;
pub mod monotonic;
pub mod perl;

pub use dotted::DottedScheme;
pub use monotonic::MonotonicScheme;
pub use perl::PerlScheme;
