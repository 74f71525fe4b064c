use reqwest::{header::HeaderMap, StatusCode};
use serde::de;

use crate::{error::StatusError, trans::Transport};

const TOTAL_COUNT: &str = "x-total-count";

/// Status code an operation expects from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expect {
    /// Exactly this status code, nothing else.
    Status(StatusCode),

    /// Any status code in the 2xx range.
    Success,
}

impl Expect {
    fn matches(self, status: StatusCode) -> bool {
        match self {
            Expect::Status(expected) => status == expected,
            Expect::Success => status.is_success(),
        }
    }
}

/// A fully buffered API response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Deserialize the body as JSON.
    pub fn json<T: de::DeserializeOwned>(&self) -> eyre::Result<T> {
        use eyre::WrapErr as _;

        serde_json::from_str(&self.body).wrap_err("error unmarshalling response")
    }

    /// Value of the `X-Total-Count` header.
    ///
    /// A missing header reads as 0. So does a malformed one, which is also logged.
    pub fn total_count(&self) -> u32 {
        let Some(value) = self.headers.get(TOTAL_COUNT) else {
            return 0;
        };

        match value.to_str().ok().and_then(|val| val.trim().parse().ok()) {
            Some(count) => count,
            None => {
                log::warn!("Ignoring malformed X-Total-Count header: {value:?}");
                0
            }
        }
    }
}

/// Send a request and check the response status against `expect`.
///
/// The response body is always read in full, so it is available to the error on a mismatch.
pub(crate) async fn send_request(
    transport: &Transport,
    req: reqwest::Request,
    expect: Expect,
) -> eyre::Result<ApiResponse> {
    let res = transport.call(req).await?;

    if !expect.matches(res.status) {
        return Err(StatusError::new(res.status, res.body).into());
    }

    Ok(res)
}
