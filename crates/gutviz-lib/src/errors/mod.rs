use thiserror::Error;

#[derive(Error, Debug)]
pub enum GutvizError {
    #[error("unable to convert value of type {type_name} to JSON")]
    TypeConversion { type_name: String },

    #[error("invalid JSON input: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("JSON encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("cannot encode non-finite number {0}")]
    NonFiniteNumber(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Application(String),
}

pub type Result<T> = std::result::Result<T, GutvizError>;

/// Logs a fatal error and exits the process with code 1.
///
/// Intended for unrecoverable errors during CLI command execution.
pub fn handle_fatal(err: GutvizError) -> ! {
    tracing::error!("Fatal error: {}", err);
    std::process::exit(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_conversion_names_the_type() {
        let err = GutvizError::TypeConversion {
            type_name: "Opaque".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to convert value of type Opaque to JSON"
        );
    }

    #[test]
    fn parse_error_surfaces_parser_detail() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let detail = inner.to_string();
        let err = GutvizError::Parse(inner);
        assert!(err.to_string().contains(&detail));
    }
}
