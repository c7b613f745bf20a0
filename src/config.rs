use serde::Deserialize;

// =============================================================================
// Bump defaults
// =============================================================================

/// Default step applied by a bump
pub const DEFAULT_BUMP_NUM: i64 = 1;

/// Default part to bump (the least significant segment)
pub const DEFAULT_BUMP_PART: i64 = -1;

// =============================================================================
// Perl-style scheme constants
// =============================================================================

/// Segment values at or above this carry into the next more significant segment
pub const PERL_SEGMENT_BASE: u64 = 1000;

/// Canonical Perl versions always render at least this many segments
pub const PERL_MIN_NORMAL_SEGMENTS: usize = 3;

/// Options accepted by `VersionScheme::bump`
///
/// Missing fields take their defaults, so `{"part": 0}` is a valid record.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BumpOptions {
    /// Signed step size; must be non-zero
    pub num: i64,
    /// Segment to bump: `0` is the leftmost, `-1` the rightmost
    pub part: i64,
    /// Zero every segment right of the bumped one after a positive bump
    pub reset_smaller: bool,
}

impl Default for BumpOptions {
    fn default() -> Self {
        Self {
            num: DEFAULT_BUMP_NUM,
            part: DEFAULT_BUMP_PART,
            reset_smaller: true,
        }
    }
}

impl BumpOptions {
    pub fn with_num(mut self, num: i64) -> Self {
        self.num = num;
        self
    }

    pub fn with_part(mut self, part: i64) -> Self {
        self.part = part;
        self
    }

    pub fn with_reset_smaller(mut self, reset_smaller: bool) -> Self {
        self.reset_smaller = reset_smaller;
        self
    }
}

/// Options accepted by `VersionScheme::normalize`
///
/// `parts` is only honored by the dotted scheme, which truncates or
/// zero-extends the version to that many segments.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeOptions {
    pub parts: Option<i64>,
}

impl NormalizeOptions {
    pub fn with_parts(mut self, parts: i64) -> Self {
        self.parts = Some(parts);
        self
    }
}
