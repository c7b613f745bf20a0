//! Segment arithmetic shared by all schemes
//!
//! Bumping a version always follows the same steps before any scheme-specific
//! logic runs: the step must be non-zero, and the signed part index must
//! resolve to exactly one segment. Negative parts count from the right
//! (`-1` is the least significant segment).

use crate::scheme::error::SchemeError;

/// Reject a zero step.
pub fn ensure_nonzero_step(num: i64) -> Result<(), SchemeError> {
    if num == 0 {
        return Err(SchemeError::InvalidOption(
            "'num' must be non-zero".to_string(),
        ));
    }
    Ok(())
}

/// Resolve a signed part index against a segment count.
///
/// Examples with `len = 3`:
/// - `0` -> 0, `2` -> 2
/// - `-1` -> 2, `-3` -> 0
/// - `3` and `-4` are out of range
pub fn resolve_part(part: i64, len: usize) -> Result<usize, SchemeError> {
    let out_of_range = || {
        SchemeError::InvalidOption(format!(
            "'part' {} is out of range for a version with {} segments",
            part, len
        ))
    };

    let len = i64::try_from(len).map_err(|_| out_of_range())?;
    let index = if part < 0 { len + part } else { part };

    if !(0..len).contains(&index) {
        return Err(out_of_range());
    }
    usize::try_from(index).map_err(|_| out_of_range())
}

/// Add a signed step to a segment value.
///
/// Fails with `Underflow` when the result would drop below `floor`, and with
/// `Overflow` when it does not fit in a `u64`.
pub fn apply_step(value: u64, num: i64, floor: u64, segment: usize) -> Result<u64, SchemeError> {
    let underflow = SchemeError::Underflow {
        segment,
        value,
        num,
        floor,
    };

    match value.checked_add_signed(num) {
        Some(sum) if sum >= floor => Ok(sum),
        Some(_) => Err(underflow),
        None if num < 0 => Err(underflow),
        None => Err(SchemeError::Overflow { segment }),
    }
}

/// Parse a run of ASCII digits into a segment value.
///
/// Returns `None` for anything that is not a plain unsigned integer
/// (signs, whitespace, empty input) or does not fit in a `u64`.
pub fn parse_digits(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, 3, 2)]
    #[case(-3, 3, 0)]
    #[case(0, 3, 0)]
    #[case(2, 3, 2)]
    #[case(-1, 1, 0)]
    #[case(-2, 2, 0)]
    fn resolve_part_returns_absolute_index(
        #[case] part: i64,
        #[case] len: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(resolve_part(part, len), Ok(expected));
    }

    #[rstest]
    #[case(3, 3)]
    #[case(-4, 3)]
    #[case(0, 0)]
    #[case(-1, 0)]
    #[case(i64::MIN, 2)]
    #[case(i64::MAX, 2)]
    fn resolve_part_rejects_out_of_range(#[case] part: i64, #[case] len: usize) {
        assert!(matches!(
            resolve_part(part, len),
            Err(SchemeError::InvalidOption(_))
        ));
    }

    #[test]
    fn ensure_nonzero_step_rejects_zero() {
        assert!(matches!(
            ensure_nonzero_step(0),
            Err(SchemeError::InvalidOption(_))
        ));
        assert_eq!(ensure_nonzero_step(-3), Ok(()));
        assert_eq!(ensure_nonzero_step(1), Ok(()));
    }

    #[rstest]
    #[case(5, 1, 0, Ok(6))]
    #[case(5, -5, 0, Ok(0))]
    #[case(5, -4, 1, Ok(1))]
    #[case(5, -6, 0, Err(SchemeError::Underflow { segment: 0, value: 5, num: -6, floor: 0 }))]
    #[case(1, -1, 1, Err(SchemeError::Underflow { segment: 0, value: 1, num: -1, floor: 1 }))]
    #[case(0, i64::MIN, 0, Err(SchemeError::Underflow { segment: 0, value: 0, num: i64::MIN, floor: 0 }))]
    #[case(u64::MAX, 1, 0, Err(SchemeError::Overflow { segment: 0 }))]
    fn apply_step_returns_expected(
        #[case] value: u64,
        #[case] num: i64,
        #[case] floor: u64,
        #[case] expected: Result<u64, SchemeError>,
    ) {
        assert_eq!(apply_step(value, num, floor, 0), expected);
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("007", Some(7))]
    #[case("18446744073709551615", Some(u64::MAX))]
    #[case("18446744073709551616", None)]
    #[case("", None)]
    #[case("+1", None)]
    #[case("-1", None)]
    #[case("1a", None)]
    fn parse_digits_returns_expected(#[case] digits: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_digits(digits), expected);
    }
}
