//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordforgeError {
    #[error("CONFIG/{0}")]
    Config(String),

    #[error("SEED/{0}")]
    Seed(String),

    #[error("SINK/{0}")]
    Sink(String),

    #[error("IO/{0}")]
    Io(#[from] std::io::Error),
}

impl WordforgeError {
    /// Configuration error with rule context, fatal at startup.
    pub fn config(rule: &str, detail: impl std::fmt::Display) -> Self {
        Self::Config(format!("{rule}: {detail}"))
    }

    /// Sink failure annotated with the size of the batch that was in flight.
    pub fn sink(batch_len: usize, detail: impl std::fmt::Display) -> Self {
        Self::Sink(format!("batch of {batch_len} dropped: {detail}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefixes() {
        let err = WordforgeError::config("leetspeak", "empty substitution table");
        assert_eq!(err.to_string(), "CONFIG/leetspeak: empty substitution table");

        let err = WordforgeError::sink(137, "broken pipe");
        assert!(err.to_string().starts_with("SINK/batch of 137"));
    }
}
