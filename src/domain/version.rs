use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Strict `MAJOR.MINOR.PATCH`, no leading zeros, no pre-release or build metadata.
const SEMVER_PATTERN: &str = r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$";

fn semver_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("semver pattern is valid"))
}

/// Marketing version of a release, ordered by `(major, minor, patch)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarketingVersion(semver::Version);

impl MarketingVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        MarketingVersion(semver::Version::new(major, minor, patch))
    }

    /// Parse a strict three-component version.
    ///
    /// Returns `None` for anything the anchored pattern rejects (extra
    /// components, leading zeros, pre-release suffixes, surrounding
    /// whitespace) and for components that overflow `u64`.
    pub fn parse(text: &str) -> Option<Self> {
        if !semver_regex().is_match(text) {
            return None;
        }
        semver::Version::parse(text).ok().map(MarketingVersion)
    }
}

impl fmt::Display for MarketingVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
