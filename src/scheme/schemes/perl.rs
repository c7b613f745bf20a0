//! Perl-style versioning scheme
//!
//! Follows the parsing and rendering rules of Perl's `version` module:
//! - Dotted-decimal: `v1.2.3`, `v1`, or three or more segments without `v` (`1.2.3`)
//! - Decimal: `1` or `1.23456`. The fraction is split into three-digit groups,
//!   right-padded with zeros, so `1.2` means `v1.200.0` and `1.002003` means `v1.2.3`
//!
//! The canonical form has a leading `v` and at least three segments.
//!
//! Bumping carries into the more significant segment whenever a segment
//! reaches 1000: `1.2.999` bumps to `v1.3.0`. A decrease that would leave a
//! segment other than the first at 1000 or more is rejected as ambiguous.

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use tracing::debug;

use crate::config::{BumpOptions, NormalizeOptions, PERL_MIN_NORMAL_SEGMENTS, PERL_SEGMENT_BASE};
use crate::scheme::error::SchemeError;
use crate::scheme::segment::{apply_step, ensure_nonzero_step, parse_digits, resolve_part};
use crate::scheme::traits::VersionScheme;
use crate::scheme::types::SchemeKind;

/// Digits per segment in a decimal version's fraction
const DECIMAL_GROUP_WIDTH: usize = 3;

/// Scheme for Perl dotted-decimal versions
pub struct PerlScheme {
    /// Regex for dotted-decimal versions: `v1`, `v1.2`, `1.2.3`
    dotted_re: Regex,
    /// Regex for decimal versions: `1`, `1.002003`
    decimal_re: Regex,
}

/// Parsed version, already padded to the canonical segment count
#[derive(Debug, Clone, PartialEq, Eq)]
struct PerlVersion {
    segments: Vec<u64>,
}

impl PerlVersion {
    fn new(mut segments: Vec<u64>) -> Self {
        if segments.len() < PERL_MIN_NORMAL_SEGMENTS {
            segments.resize(PERL_MIN_NORMAL_SEGMENTS, 0);
        }
        Self { segments }
    }
}

impl fmt::Display for PerlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: Vec<String> = self.segments.iter().map(u64::to_string).collect();
        write!(f, "v{}", segments.join("."))
    }
}

impl PerlScheme {
    pub fn new() -> Self {
        Self {
            dotted_re: Regex::new(r"^(?:v[0-9]+(?:\.[0-9]+)*|[0-9]+(?:\.[0-9]+){2,})$").unwrap(),
            decimal_re: Regex::new(r"^([0-9]+)(?:\.([0-9]+))?$").unwrap(),
        }
    }

    fn parse(&self, version: &str) -> Result<PerlVersion, SchemeError> {
        let invalid = || SchemeError::invalid_version(version);

        if self.dotted_re.is_match(version) {
            let digits = version.strip_prefix('v').unwrap_or(version);
            let segments = digits
                .split('.')
                .map(parse_digits)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?;
            return Ok(PerlVersion::new(segments));
        }

        let caps = self.decimal_re.captures(version).ok_or_else(invalid)?;
        let mut segments = vec![parse_digits(&caps[1]).ok_or_else(invalid)?];
        if let Some(fraction) = caps.get(2) {
            segments.extend(
                decimal_fraction_segments(fraction.as_str()).ok_or_else(invalid)?,
            );
        }
        Ok(PerlVersion::new(segments))
    }
}

impl Default for PerlScheme {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a decimal fraction into three-digit segments.
///
/// Examples:
/// - "2" -> [200]
/// - "002003" -> [2, 3]
/// - "0023" -> [2, 300]
fn decimal_fraction_segments(fraction: &str) -> Option<Vec<u64>> {
    (0..fraction.len())
        .step_by(DECIMAL_GROUP_WIDTH)
        .map(|start| {
            let end = (start + DECIMAL_GROUP_WIDTH).min(fraction.len());
            let group = format!("{:0<width$}", &fraction[start..end], width = DECIMAL_GROUP_WIDTH);
            parse_digits(&group)
        })
        .collect()
}

impl VersionScheme for PerlScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Perl
    }

    fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    fn normalize(&self, version: &str, _opts: &NormalizeOptions) -> Result<String, SchemeError> {
        Ok(self.parse(version)?.to_string())
    }

    fn compare(&self, v1: &str, v2: &str) -> Result<Ordering, SchemeError> {
        let a = self.parse(v1)?;
        let b = self.parse(v2)?;
        let len = a.segments.len().max(b.segments.len());
        let value_at = |v: &PerlVersion, i: usize| v.segments.get(i).copied().unwrap_or(0);

        Ok((0..len)
            .map(|i| value_at(&a, i).cmp(&value_at(&b, i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal))
    }

    fn bump(&self, version: &str, opts: &BumpOptions) -> Result<String, SchemeError> {
        let mut parsed = self.parse(version)?;
        ensure_nonzero_step(opts.num)?;
        let index = resolve_part(opts.part, parsed.segments.len())?;
        let segments = &mut parsed.segments;

        // Carry into more significant segments; index 0 absorbs any amount
        let mut i = index;
        let mut step = opts.num;
        loop {
            let sum = apply_step(segments[i], step, 0, i)?;
            if i == 0 || sum < PERL_SEGMENT_BASE {
                segments[i] = sum;
                break;
            }
            // A decrease never borrows or carries across segments
            if step < 0 {
                return Err(SchemeError::AmbiguousBump(format!(
                    "decreasing segment {} of '{}' leaves {}, which would carry into segment {}",
                    i,
                    version,
                    sum,
                    i - 1
                )));
            }
            segments[i] = sum % PERL_SEGMENT_BASE;
            step = i64::try_from(sum / PERL_SEGMENT_BASE)
                .map_err(|_| SchemeError::Overflow { segment: i - 1 })?;
            i -= 1;
        }

        if opts.reset_smaller && opts.num > 0 {
            segments[index + 1..].fill(0);
        }

        let bumped = parsed.to_string();
        debug!("Bumped perl version {} -> {}", version, bumped);
        Ok(bumped)
    }
}
