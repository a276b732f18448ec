use crate::domain::MarketingVersion;
use crate::error::{Result, VersionGateError};
use serde_json::Value;

pub const MARKETING_VERSION_KEY: &str = "marketing_version";
pub const BUILD_NUMBER_KEY: &str = "build_number";

/// A validated version payload.
///
/// Only constructed through [`VersionRecord::from_value`], so every instance
/// holds a strict semantic version and a non-negative build number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub marketing_version: MarketingVersion,
    pub build_number: u64,
}

impl VersionRecord {
    /// Validate a decoded JSON payload and convert it into a record.
    ///
    /// `source` names where the payload came from (a file path, or a path at a
    /// baseline ref) and prefixes every diagnostic. Checks run in a fixed
    /// order and the first violation wins.
    pub fn from_value(value: &Value, source: &str) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| VersionGateError::schema(format!("{} must be a JSON object", source)))?;

        let marketing = object.get(MARKETING_VERSION_KEY).ok_or_else(|| {
            VersionGateError::schema(format!("{} missing {}", source, MARKETING_VERSION_KEY))
        })?;
        let build = object.get(BUILD_NUMBER_KEY).ok_or_else(|| {
            VersionGateError::schema(format!("{} missing {}", source, BUILD_NUMBER_KEY))
        })?;

        let marketing = marketing.as_str().ok_or_else(|| {
            VersionGateError::schema(format!(
                "{} {} must be a string",
                source, MARKETING_VERSION_KEY
            ))
        })?;
        let marketing_version = MarketingVersion::parse(marketing).ok_or_else(|| {
            VersionGateError::schema(format!(
                "{} {} must be SemVer (x.y.z), got '{}'",
                source, MARKETING_VERSION_KEY, marketing
            ))
        })?;

        let build_number = parse_build_number(build, source)?;

        Ok(VersionRecord {
            marketing_version,
            build_number,
        })
    }

    /// Convenience constructor for already-known values
    pub fn new(marketing_version: MarketingVersion, build_number: u64) -> Self {
        VersionRecord {
            marketing_version,
            build_number,
        }
    }
}

fn parse_build_number(value: &Value, source: &str) -> Result<u64> {
    // Integers beyond the i64/u64 range decode as floats, so they are
    // reported as non-integers rather than as negative.
    let number = match value {
        Value::Number(number) if number.is_u64() || number.is_i64() => number,
        _ => {
            return Err(VersionGateError::schema(format!(
                "{} {} must be an integer",
                source, BUILD_NUMBER_KEY
            )))
        }
    };

    match number.as_u64() {
        Some(build) => Ok(build),
        None => Err(VersionGateError::schema(format!(
            "{} {} must be >= 0, got {}",
            source, BUILD_NUMBER_KEY, number
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema_message(value: Value) -> String {
        match VersionRecord::from_value(&value, "Docs/version.json") {
            Err(VersionGateError::Schema(msg)) => msg,
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_record() {
        let record = VersionRecord::from_value(
            &json!({"marketing_version": "1.2.0", "build_number": 5}),
            "Docs/version.json",
        )
        .unwrap();
        assert_eq!(record.marketing_version, MarketingVersion::new(1, 2, 0));
        assert_eq!(record.build_number, 5);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let value = json!({"marketing_version": "0.1.0", "build_number": 0, "notes": "x"});
        assert!(VersionRecord::from_value(&value, "current").is_ok());
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            schema_message(json!({"build_number": 1})),
            "Docs/version.json missing marketing_version"
        );
        assert_eq!(
            schema_message(json!({"marketing_version": "1.0.0"})),
            "Docs/version.json missing build_number"
        );
        assert_eq!(
            schema_message(json!({})),
            "Docs/version.json missing marketing_version"
        );
    }

    #[test]
    fn test_non_object_payload() {
        assert_eq!(
            schema_message(json!(["1.0.0", 1])),
            "Docs/version.json must be a JSON object"
        );
    }

    #[test]
    fn test_marketing_version_type_and_syntax() {
        assert_eq!(
            schema_message(json!({"marketing_version": 1, "build_number": 1})),
            "Docs/version.json marketing_version must be a string"
        );
        let msg = schema_message(json!({"marketing_version": "1.2.3-rc.1", "build_number": 1}));
        assert!(msg.starts_with("Docs/version.json marketing_version must be SemVer (x.y.z)"));
        assert!(msg.contains("1.2.3-rc.1"));
    }

    #[test]
    fn test_build_number_rules() {
        for bad in [json!("5"), json!(5.5), json!(true), json!(null), json!([5])] {
            assert_eq!(
                schema_message(json!({"marketing_version": "1.0.0", "build_number": bad})),
                "Docs/version.json build_number must be an integer"
            );
        }
        let msg = schema_message(json!({"marketing_version": "1.0.0", "build_number": -1}));
        assert_eq!(msg, "Docs/version.json build_number must be >= 0, got -1");
    }

    #[test]
    fn test_out_of_range_build_number_is_not_an_integer() {
        for text in ["-10000000000000000000", "18446744073709551616"] {
            let value: Value = serde_json::from_str(&format!(
                r#"{{"marketing_version": "1.0.0", "build_number": {}}}"#,
                text
            ))
            .unwrap();
            assert_eq!(
                schema_message(value),
                "Docs/version.json build_number must be an integer"
            );
        }
    }

    #[test]
    fn test_build_number_accepts_non_negative_integers() {
        for build in [0u64, 1, 42, u32::MAX as u64, u64::MAX] {
            let value = json!({"marketing_version": "1.0.0", "build_number": build});
            let record = VersionRecord::from_value(&value, "current").unwrap();
            assert_eq!(record.build_number, build);
        }
    }

    #[test]
    fn test_marketing_version_checked_before_build_number() {
        let msg = schema_message(json!({"marketing_version": 3, "build_number": -3}));
        assert!(msg.contains("marketing_version must be a string"));
    }

    #[test]
    fn test_source_label_prefixes_diagnostic() {
        let err = VersionRecord::from_value(
            &json!({"marketing_version": "1.0", "build_number": 1}),
            "Docs/version.json at origin/main",
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Docs/version.json at origin/main marketing_version"));
    }
}
