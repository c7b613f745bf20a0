//! Dotted versioning scheme
//!
//! Versions are one or more non-negative integers separated by dots:
//! `1`, `1.2`, `0.1.2.3`. Segments may carry leading zeros; the digit width
//! of each segment is kept when the version is normalized or bumped, so
//! `1.009` bumps to `1.010`.

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use tracing::debug;

use crate::config::{BumpOptions, NormalizeOptions};
use crate::scheme::error::SchemeError;
use crate::scheme::segment::{apply_step, ensure_nonzero_step, parse_digits, resolve_part};
use crate::scheme::traits::VersionScheme;
use crate::scheme::types::SchemeKind;

/// Scheme for `P0.P1...Pn` versions
pub struct DottedScheme {
    /// Regex for dot-separated digit runs
    version_re: Regex,
}

/// A segment value together with the number of digits it was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    value: u64,
    width: usize,
}

impl Segment {
    /// Same width, new value. Values needing more digits grow naturally.
    fn with_value(self, value: u64) -> Self {
        Self { value, ..self }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width)
    }
}

impl DottedScheme {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r"^[0-9]+(?:\.[0-9]+)*$").unwrap(),
        }
    }

    fn parse(&self, version: &str) -> Result<Vec<Segment>, SchemeError> {
        if !self.version_re.is_match(version) {
            return Err(SchemeError::invalid_version(version));
        }

        version
            .split('.')
            .map(|digits| {
                parse_digits(digits)
                    .map(|value| Segment {
                        value,
                        width: digits.len(),
                    })
                    .ok_or_else(|| SchemeError::invalid_version(version))
            })
            .collect()
    }
}

impl Default for DottedScheme {
    fn default() -> Self {
        Self::new()
    }
}

fn render(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

impl VersionScheme for DottedScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Dotted
    }

    fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    fn normalize(&self, version: &str, opts: &NormalizeOptions) -> Result<String, SchemeError> {
        let mut segments = self.parse(version)?;

        if let Some(parts) = opts.parts {
            let parts = usize::try_from(parts)
                .ok()
                .filter(|parts| *parts >= 1)
                .ok_or_else(|| {
                    SchemeError::InvalidOption(format!("'parts' must be at least 1, got {}", parts))
                })?;
            segments
                .try_reserve(parts.saturating_sub(segments.len()))
                .map_err(|_| SchemeError::InvalidOption(format!("'parts' {} is too large", parts)))?;
            segments.resize(parts, Segment { value: 0, width: 1 });
        }

        Ok(render(&segments))
    }

    fn compare(&self, v1: &str, v2: &str) -> Result<Ordering, SchemeError> {
        let a = self.parse(v1)?;
        let b = self.parse(v2)?;
        let len = a.len().max(b.len());
        let value_at = |segments: &[Segment], i: usize| segments.get(i).map_or(0, |s| s.value);

        Ok((0..len)
            .map(|i| value_at(&a, i).cmp(&value_at(&b, i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal))
    }

    fn bump(&self, version: &str, opts: &BumpOptions) -> Result<String, SchemeError> {
        let mut segments = self.parse(version)?;
        ensure_nonzero_step(opts.num)?;
        let index = resolve_part(opts.part, segments.len())?;

        let value = apply_step(segments[index].value, opts.num, 0, index)?;
        segments[index] = segments[index].with_value(value);

        if opts.reset_smaller && opts.num > 0 {
            for segment in &mut segments[index + 1..] {
                *segment = segment.with_value(0);
            }
        }

        let bumped = render(&segments);
        debug!("Bumped dotted version {} -> {}", version, bumped);
        Ok(bumped)
    }
}
