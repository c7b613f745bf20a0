//! Monotonic versioning scheme
//!
//! Versions have the form `COMPATIBILITY.RELEASE`:
//! - `COMPATIBILITY` is a non-negative integer, bumped on incompatible changes
//! - `RELEASE` is a positive integer that increases on every release,
//!   including compatibility bumps
//! - An optional `.0` suffix is accepted (`1.2.0`) and preserved by bump,
//!   but stripped by normalize
//!
//! Leading zeros are not allowed (`01.2` and `1.02` are invalid).

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use tracing::debug;

use crate::config::{BumpOptions, NormalizeOptions};
use crate::scheme::error::SchemeError;
use crate::scheme::segment::{apply_step, ensure_nonzero_step, parse_digits, resolve_part};
use crate::scheme::traits::VersionScheme;
use crate::scheme::types::SchemeKind;

const COMPATIBILITY: usize = 0;
const RELEASE: usize = 1;

/// Lowest value the release segment may take
const RELEASE_FLOOR: u64 = 1;

/// Scheme for `C.R[.0]` versions
pub struct MonotonicScheme {
    /// Regex for `C.R` with an optional `.0` suffix
    version_re: Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonotonicVersion {
    compatibility: u64,
    release: u64,
    zero_suffix: bool,
}

impl fmt::Display for MonotonicVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.compatibility, self.release)?;
        if self.zero_suffix {
            f.write_str(".0")?;
        }
        Ok(())
    }
}

impl MonotonicScheme {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r"^(0|[1-9][0-9]*)\.([1-9][0-9]*)(\.0)?$").unwrap(),
        }
    }

    fn parse(&self, version: &str) -> Result<MonotonicVersion, SchemeError> {
        let invalid = || SchemeError::invalid_version(version);
        let caps = self.version_re.captures(version).ok_or_else(invalid)?;

        Ok(MonotonicVersion {
            compatibility: parse_digits(&caps[1]).ok_or_else(invalid)?,
            release: parse_digits(&caps[2]).ok_or_else(invalid)?,
            zero_suffix: caps.get(3).is_some(),
        })
    }
}

impl Default for MonotonicScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionScheme for MonotonicScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Monotonic
    }

    fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    fn normalize(&self, version: &str, _opts: &NormalizeOptions) -> Result<String, SchemeError> {
        let parsed = self.parse(version)?;
        Ok(MonotonicVersion {
            zero_suffix: false,
            ..parsed
        }
        .to_string())
    }

    fn compare(&self, v1: &str, v2: &str) -> Result<Ordering, SchemeError> {
        let a = self.parse(v1)?;
        let b = self.parse(v2)?;
        Ok((a.compatibility, a.release).cmp(&(b.compatibility, b.release)))
    }

    fn bump(&self, version: &str, opts: &BumpOptions) -> Result<String, SchemeError> {
        let mut parsed = self.parse(version)?;
        ensure_nonzero_step(opts.num)?;
        let index = resolve_part(opts.part, 2)?;

        if index == RELEASE {
            parsed.release = apply_step(parsed.release, opts.num, RELEASE_FLOOR, RELEASE)?;
        } else {
            parsed.compatibility = apply_step(parsed.compatibility, opts.num, 0, COMPATIBILITY)?;

            // Release always moves one step in the direction of the compatibility bump
            if opts.num < 0 && parsed.release == RELEASE_FLOOR {
                return Err(SchemeError::AmbiguousBump(format!(
                    "decreasing compatibility of '{}' would move release below {}",
                    version, RELEASE_FLOOR
                )));
            }
            parsed.release = apply_step(parsed.release, opts.num.signum(), RELEASE_FLOOR, RELEASE)?;
        }

        let bumped = parsed.to_string();
        debug!("Bumped monotonic version {} -> {}", version, bumped);
        Ok(bumped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.1", true)]
    #[case("1.2", true)]
    #[case("10.200", true)]
    #[case("1.2.0", true)]
    #[case("1.0", false)] // release must be at least 1
    #[case("1.0.0", false)]
    #[case("01.2", false)] // leading zero
    #[case("1.02", false)]
    #[case("1", false)]
    #[case("1.2.1", false)] // only a literal .0 suffix is accepted
    #[case("1.2.0.0", false)]
    #[case("v1.2", false)]
    #[case("-1.2", false)]
    #[case("1..2", false)]
    #[case("1.a", false)]
    #[case("", false)]
    #[case(" 1.2", false)]
    #[case("99999999999999999999.1", false)] // does not fit in a segment
    fn is_valid_returns_expected(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(MonotonicScheme::new().is_valid(version), expected);
    }

    #[rstest]
    #[case("1.2", "1.2")]
    #[case("1.2.0", "1.2")]
    #[case("0.13.0", "0.13")]
    fn normalize_strips_zero_suffix(#[case] version: &str, #[case] expected: &str) {
        let scheme = MonotonicScheme::new();
        assert_eq!(
            scheme.normalize(version, &NormalizeOptions::default()),
            Ok(expected.to_string())
        );
    }

    #[test]
    fn normalize_rejects_invalid_version() {
        let scheme = MonotonicScheme::new();
        assert_eq!(
            scheme.normalize("1.0", &NormalizeOptions::default()),
            Err(SchemeError::InvalidVersion {
                version: "1.0".to_string()
            })
        );
    }

    #[rstest]
    #[case("1.2", "1.13", Ordering::Less)]
    #[case("1.13", "1.2", Ordering::Greater)]
    #[case("1.2", "1.2.0", Ordering::Equal)]
    #[case("2.3", "1.30", Ordering::Greater)]
    #[case("0.9", "1.1", Ordering::Less)]
    fn compare_returns_expected(#[case] v1: &str, #[case] v2: &str, #[case] expected: Ordering) {
        assert_eq!(MonotonicScheme::new().compare(v1, v2), Ok(expected));
    }

    #[test]
    fn compare_rejects_invalid_version() {
        let scheme = MonotonicScheme::new();
        assert!(matches!(
            scheme.compare("1.2", "1.x"),
            Err(SchemeError::InvalidVersion { .. })
        ));
    }

    #[rstest]
    #[case("1.2", BumpOptions::default(), "1.3")]
    #[case("1.2", BumpOptions::default().with_part(1), "1.3")]
    #[case("1.2", BumpOptions::default().with_num(5), "1.7")]
    #[case("1.2", BumpOptions::default().with_part(0), "2.3")]
    #[case("1.2", BumpOptions::default().with_part(-2), "2.3")]
    #[case("1.2", BumpOptions::default().with_part(0).with_num(3), "4.3")]
    #[case("1.2", BumpOptions::default().with_num(-1).with_part(0), "0.1")]
    #[case("1.5", BumpOptions::default().with_num(-4), "1.1")]
    #[case("1.2.0", BumpOptions::default(), "1.3.0")] // suffix is kept
    #[case("1.2.0", BumpOptions::default().with_part(0), "2.3.0")]
    #[case("1.2", BumpOptions::default().with_part(0).with_reset_smaller(false), "2.3")]
    fn bump_returns_expected(
        #[case] version: &str,
        #[case] opts: BumpOptions,
        #[case] expected: &str,
    ) {
        assert_eq!(
            MonotonicScheme::new().bump(version, &opts),
            Ok(expected.to_string())
        );
    }

    #[test]
    fn bump_rejects_invalid_version_before_options() {
        let scheme = MonotonicScheme::new();
        assert!(matches!(
            scheme.bump("1.0", &BumpOptions::default().with_num(0)),
            Err(SchemeError::InvalidVersion { .. })
        ));
    }

    #[rstest]
    #[case(BumpOptions::default().with_num(0))]
    #[case(BumpOptions::default().with_part(2))]
    #[case(BumpOptions::default().with_part(-3))]
    fn bump_rejects_invalid_options(#[case] opts: BumpOptions) {
        assert!(matches!(
            MonotonicScheme::new().bump("1.2", &opts),
            Err(SchemeError::InvalidOption(_))
        ));
    }

    #[rstest]
    #[case("1.2", BumpOptions::default().with_num(-2))] // release below 1
    #[case("1.1", BumpOptions::default().with_num(-1))]
    #[case("0.5", BumpOptions::default().with_num(-1).with_part(0))] // compatibility below 0
    #[case("1.5", BumpOptions::default().with_num(-2).with_part(0))]
    fn bump_rejects_underflow(#[case] version: &str, #[case] opts: BumpOptions) {
        assert!(matches!(
            MonotonicScheme::new().bump(version, &opts),
            Err(SchemeError::Underflow { .. })
        ));
    }

    #[test]
    fn bump_rejects_compatibility_decrease_at_first_release() {
        let scheme = MonotonicScheme::new();
        assert!(matches!(
            scheme.bump("2.1", &BumpOptions::default().with_num(-1).with_part(0)),
            Err(SchemeError::AmbiguousBump(_))
        ));
    }
}
