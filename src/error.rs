//! Error types for swarm2d.
//!
//! The engine itself never validates: setters accept whatever the host sends,
//! degenerate values included. The types here back the
//! opt-in [`Config::validate`](crate::Config::validate) check hosts can run
//! before applying user-entered values.

use std::fmt;

/// A configuration value the simulation cannot meaningfully run with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field, value } => {
                write!(f, "configuration field `{}` is not finite: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = ConfigError::NonFinite {
            field: "shape_force",
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("shape_force"));
    }
}
