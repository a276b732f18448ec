//! Monotonicity and release-consistency rules.
//!
//! Rules are evaluated in a fixed order and the first violation is returned,
//! which decides the diagnostic a caller sees when several co-occur.

use crate::domain::VersionRecord;
use crate::error::{Result, VersionGateError};

/// A release label demands that the version file was touched at all.
///
/// Checked before any baseline record is read.
pub fn ensure_release_touched(
    file_changed: bool,
    release_requested: bool,
    version_path: &str,
) -> Result<()> {
    if release_requested && !file_changed {
        return Err(VersionGateError::rule(format!(
            "{} must be updated when release label is applied",
            version_path
        )));
    }
    Ok(())
}

/// Everything the comparison needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonContext {
    pub current: VersionRecord,
    pub base: Option<VersionRecord>,
    pub file_changed: bool,
    pub release_requested: bool,
}

impl ComparisonContext {
    pub fn new(
        current: VersionRecord,
        base: Option<VersionRecord>,
        file_changed: bool,
        release_requested: bool,
    ) -> Self {
        ComparisonContext {
            current,
            base,
            file_changed,
            release_requested,
        }
    }

    /// Apply the comparison rules against the baseline record.
    ///
    /// Passes trivially when there is no baseline record or the file did not
    /// change.
    pub fn evaluate(&self) -> Result<()> {
        let base = match &self.base {
            Some(base) if self.file_changed => base,
            _ => return Ok(()),
        };
        let current = &self.current;

        if current.build_number <= base.build_number {
            return Err(VersionGateError::rule(format!(
                "build_number must increase (current {}, base {})",
                current.build_number, base.build_number
            )));
        }

        if current.marketing_version < base.marketing_version {
            return Err(VersionGateError::rule(format!(
                "marketing_version must not decrease (current {}, base {})",
                current.marketing_version, base.marketing_version
            )));
        }

        if self.release_requested && current.marketing_version <= base.marketing_version {
            return Err(VersionGateError::rule(format!(
                "marketing_version must increase for release label (current {}, base {})",
                current.marketing_version, base.marketing_version
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarketingVersion;

    fn record(major: u64, minor: u64, patch: u64, build: u64) -> VersionRecord {
        VersionRecord::new(MarketingVersion::new(major, minor, patch), build)
    }

    fn rule_message(ctx: &ComparisonContext) -> String {
        match ctx.evaluate() {
            Err(VersionGateError::Rule(msg)) => msg,
            other => panic!("expected rule violation, got {:?}", other),
        }
    }

    #[test]
    fn test_release_without_change_fails() {
        let err = ensure_release_touched(false, true, "Docs/version.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Docs/version.json must be updated when release label is applied"
        );
        assert!(ensure_release_touched(true, true, "Docs/version.json").is_ok());
        assert!(ensure_release_touched(false, false, "Docs/version.json").is_ok());
    }

    #[test]
    fn test_unchanged_file_skips_comparison() {
        // Would violate every rule if evaluated.
        let ctx = ComparisonContext::new(record(1, 0, 0, 1), Some(record(2, 0, 0, 9)), false, true);
        assert!(ctx.evaluate().is_ok());
    }

    #[test]
    fn test_context_without_base_record_skips_comparison() {
        let ctx = ComparisonContext::new(record(1, 0, 0, 1), None, true, true);
        assert!(ctx.evaluate().is_ok());
    }

    #[test]
    fn test_build_number_must_strictly_increase() {
        for base_build in [5, 6] {
            let ctx = ComparisonContext::new(
                record(1, 2, 0, 5),
                Some(record(1, 2, 0, base_build)),
                true,
                false,
            );
            assert_eq!(
                rule_message(&ctx),
                format!("build_number must increase (current 5, base {})", base_build)
            );
        }
        let ctx = ComparisonContext::new(record(1, 2, 0, 6), Some(record(1, 2, 0, 5)), true, false);
        assert!(ctx.evaluate().is_ok());
    }

    #[test]
    fn test_regression_fails_regardless_of_release() {
        for release in [false, true] {
            let ctx =
                ComparisonContext::new(record(1, 1, 9, 6), Some(record(1, 2, 0, 5)), true, release);
            assert_eq!(
                rule_message(&ctx),
                "marketing_version must not decrease (current 1.1.9, base 1.2.0)"
            );
        }
    }

    #[test]
    fn test_release_requires_strict_bump() {
        let ctx = ComparisonContext::new(record(1, 2, 0, 6), Some(record(1, 2, 0, 5)), true, true);
        assert_eq!(
            rule_message(&ctx),
            "marketing_version must increase for release label (current 1.2.0, base 1.2.0)"
        );

        let ctx = ComparisonContext::new(record(1, 2, 1, 6), Some(record(1, 2, 0, 5)), true, true);
        assert!(ctx.evaluate().is_ok());
    }

    #[test]
    fn test_build_rule_reported_before_version_rules() {
        let ctx = ComparisonContext::new(record(1, 0, 0, 5), Some(record(2, 0, 0, 5)), true, true);
        assert!(rule_message(&ctx).starts_with("build_number must increase"));
    }

    #[test]
    fn test_equal_versions_tolerated_without_release() {
        let ctx = ComparisonContext::new(record(3, 0, 0, 11), Some(record(3, 0, 0, 10)), true, false);
        assert!(ctx.evaluate().is_ok());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let ctx = ComparisonContext::new(record(1, 2, 0, 5), Some(record(1, 2, 0, 5)), true, false);
        assert_eq!(ctx.evaluate().is_ok(), ctx.evaluate().is_ok());
        assert_eq!(rule_message(&ctx), rule_message(&ctx));
    }
}
