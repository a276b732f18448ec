//! Domain logic - version records and the rules comparing them, independent of git

pub mod record;
pub mod rules;
pub mod version;

pub use record::VersionRecord;
pub use rules::ComparisonContext;
pub use version::MarketingVersion;
