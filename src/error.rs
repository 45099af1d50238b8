use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for the kmeans-testkit library
#[derive(Error, Debug)]
pub enum TestkitError {
    /// A parameter is out of its valid domain (unknown distribution, zero clusters, bad range...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A points file or cluster report line could not be parsed (1-based line number)
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The rendering backend failed
    #[error("Plot error: {0}")]
    Plot(String),
}

impl TestkitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TestkitError::Io {
            path: path.into(),
            source,
        }
    }

    /// Message shown to the user when an input file cannot be read; `None` for other errors
    pub fn read_failure_message(&self) -> Option<String> {
        match self {
            TestkitError::Io { path, source } if source.kind() == ErrorKind::NotFound => Some(
                format!("Error: The file '{}' was not found.", path.display()),
            ),
            TestkitError::Io { path, source } => Some(format!(
                "Error: could not read '{}': {}",
                path.display(),
                source
            )),
            _ => None,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        TestkitError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::read_report;

    #[test]
    fn test_missing_file_message() {
        let err = read_report("/nonexistent/report.txt").unwrap_err();
        assert_eq!(
            err.read_failure_message().as_deref(),
            Some("Error: The file '/nonexistent/report.txt' was not found.")
        );
    }

    #[test]
    fn test_other_io_failure_message() {
        let err = TestkitError::io(
            "report.txt",
            std::io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
        );
        let message = err.read_failure_message().unwrap();
        assert!(message.starts_with("Error: could not read 'report.txt'"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn test_non_io_errors_have_no_read_message() {
        assert!(TestkitError::parse(3, "bad").read_failure_message().is_none());
        assert!(TestkitError::InvalidArgument("x".into())
            .read_failure_message()
            .is_none());
    }
}
