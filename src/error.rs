use std::fmt;

use reqwest::StatusCode;

/// Longest response body excerpt carried in a [`StatusError`] message.
const MAX_BODY_EXCERPT: usize = 500;

/// The API answered with a status code other than the one the operation expects.
///
/// Recover it from an [`eyre::Report`] with `downcast_ref::<StatusError>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    status: StatusCode,
    body: String,
}

impl StatusError {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// Status code the server answered with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Full, untruncated response body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed request, status code: {}, response: ",
            self.status.as_u16()
        )?;

        match self.body.char_indices().nth(MAX_BODY_EXCERPT) {
            Some((cut, _)) => write!(f, "{}... (truncated)", &self.body[..cut]),
            None => f.write_str(&self.body),
        }
    }
}

impl std::error::Error for StatusError {}

/// A request was rejected locally, before anything was sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept_whole() {
        let err = StatusError::new(StatusCode::BAD_REQUEST, r#"{"code":-1}"#.to_owned());
        assert_eq!(
            err.to_string(),
            r#"failed request, status code: 400, response: {"code":-1}"#
        );
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(600);
        let err = StatusError::new(StatusCode::INTERNAL_SERVER_ERROR, body.clone());

        let msg = err.to_string();
        let expected = format!(
            "failed request, status code: 500, response: {}... (truncated)",
            "x".repeat(500)
        );
        assert_eq!(msg, expected);
        assert_eq!(err.body(), body);
    }

    #[test]
    fn body_of_exactly_500_chars_is_not_truncated() {
        let err = StatusError::new(StatusCode::NOT_FOUND, "y".repeat(500));
        assert!(!err.to_string().ends_with("(truncated)"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let err = StatusError::new(StatusCode::BAD_GATEWAY, "é".repeat(501));
        let msg = err.to_string();
        assert!(msg.ends_with(&format!("{}... (truncated)", "é".repeat(500))));
    }
}
