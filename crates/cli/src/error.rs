//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: render error (bad dimensions, shader/context failures)
//! - 11: I/O error (PNG write)
//! - 12: input error (bad config JSON, unknown variant, bad color)
//! - 13: serialization error

use lumen_core::LumenError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    Render(LumenError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Render(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Render(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<LumenError> for CliError {
    fn from(e: LumenError) -> Self {
        match e {
            LumenError::InvalidColor(_) | LumenError::InvalidConfig(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Render(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_exit_code_is_10() {
        assert_eq!(CliError::Render(LumenError::InvalidDimensions).exit_code(), 10);
    }

    #[test]
    fn io_input_serialization_exit_codes() {
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
        assert_eq!(CliError::Input("bad color".into()).exit_code(), 12);
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn config_errors_route_to_input() {
        let err = CliError::from(LumenError::InvalidConfig("unknown variant 'x'".into()));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn color_errors_route_to_input() {
        let err = CliError::from(LumenError::InvalidColor("bad hex".into()));
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn dimension_errors_route_to_render() {
        let err = CliError::from(LumenError::InvalidDimensions);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn serde_json_error_routes_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        assert_eq!(CliError::from(bad).exit_code(), 13);
    }
}
