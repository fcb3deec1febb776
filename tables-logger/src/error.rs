//! Error types for loading the tables logger options.

use thiserror::Error;

/// A single constraint broken by the supplied options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// More than one output destination was requested.
    #[error("options --{} are mutually exclusive", .options.join(", --"))]
    ConflictingDestinations { options: Vec<&'static str> },

    /// An option was given without the option it depends on.
    #[error("--{option} requires --{required}")]
    MissingRequirement {
        option: &'static str,
        required: &'static str,
    },

    /// Two options which cannot be combined were given together.
    #[error("--{option} cannot be used with --{other}")]
    Incompatible {
        option: &'static str,
        other: &'static str,
    },

    /// A numeric value is outside of the allowed range.
    #[error("--{option}: value {value} out of range {min}..={max}")]
    OutOfRange {
        option: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A destination option was given an empty value.
    #[error("--{option}: empty destination")]
    EmptyDestination { option: &'static str },

    /// The UDP destination is not of the form `host:port`.
    #[error("--ip-udp: invalid destination {0:?}, expected host:port")]
    InvalidUdpDestination(String),

    /// A `--tlv` value could not be parsed.
    #[error("--tlv: invalid value {value:?}: {reason}")]
    InvalidTlv { value: String, reason: String },
}

/// Failure of a load operation, listing every violated constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct LoadError {
    violations: Vec<Violation>,
}

impl LoadError {
    /// Turn a list of collected violations into a load result.
    pub fn check(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(LoadError { violations })
        }
    }

    /// All violations, in the order the options were checked.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the error and return its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
