//! Crate-level error types.
//!
//! Only configuration I/O can fail. The camera and matrix math never
//! returns errors; degenerate inputs produce non-finite values instead.

use std::fmt;

/// Errors produced by the orbitcam crate.
#[derive(Debug)]
pub enum OrbitError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let io = OrbitError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "camera.toml",
        ));
        assert_eq!(io.to_string(), "I/O error: camera.toml");
        assert!(io.source().is_some());

        let parse = OrbitError::OptionsParse("bad key".into());
        assert_eq!(parse.to_string(), "options parse error: bad key");
        assert!(parse.source().is_none());
    }
}
