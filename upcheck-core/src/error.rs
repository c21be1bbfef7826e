use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpcheckError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("too many redirects (stopped after {0})")]
    TooManyRedirects(usize),
}

pub type Result<T> = std::result::Result<T, UpcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_keeps_subsecond_precision() {
        assert_eq!(
            UpcheckError::Timeout(Duration::from_millis(250)).to_string(),
            "timed out after 250ms"
        );
        assert_eq!(
            UpcheckError::Timeout(Duration::from_secs(5)).to_string(),
            "timed out after 5s"
        );
    }
}
