/// Errors that can occur across a nitpick run.
///
/// Each variant wraps a specific failure domain. Library crates use this
/// type directly; the binary converts to a rendered diagnostic at the
/// boundary. A run has a single failure transition: whichever variant
/// surfaces first aborts the remaining steps.
///
/// # Examples
///
/// ```
/// use nitpick_core::NitpickError;
///
/// let err = NitpickError::Config("apiKey input is required".into());
/// assert!(err.to_string().contains("apiKey"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NitpickError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration input.
    #[error("configuration error: {0}")]
    Config(String),

    /// The triggering event payload could not be read or understood.
    #[error("event payload error: {0}")]
    Event(String),

    /// GitHub API or network failure.
    #[error("GitHub error: {0}")]
    GitHub(String),

    /// Chat-completion API or response error.
    #[error("LLM error: {0}")]
    Llm(String),

    /// JSON serialization / deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: NitpickError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = NitpickError::Config("bad value".into());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn llm_error_displays_message() {
        let err = NitpickError::Llm("API error 429".into());
        assert_eq!(err.to_string(), "LLM error: API error 429");
    }
}
