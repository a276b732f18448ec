pub mod baseline;
pub mod changes;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod git;
pub mod intent;
pub mod logging;
pub mod source;
pub mod ui;
pub mod warning;

pub use error::{Result, VersionGateError};
pub use gate::{Verdict, VersionGate};
