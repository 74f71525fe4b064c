use eyre::WrapErr as _;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::{config::Config, req::ApiResponse};

const JSON_UTF8: &str = "application/json;charset=utf-8";

const LOGIN: HeaderName = HeaderName::from_static("login");
const CUSTOMER_URI: HeaderName = HeaderName::from_static("customeruri");
const PASSWORD: HeaderName = HeaderName::from_static("password");

/// Credential injection and body logging for requests to the API.
///
/// Every request passing through [`Transport::call()`] gets the `login`, `customerUri`,
/// `password` and `Content-Type` headers overwritten with the configured values, whatever the
/// caller set before.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    client: reqwest::Client,
    auth_headers: HeaderMap,
    debug: bool,
}

impl Transport {
    pub fn new(config: &Config) -> eyre::Result<Self> {
        fn header_value(name: &str, value: &str) -> eyre::Result<HeaderValue> {
            HeaderValue::from_str(value)
                .wrap_err_with(|| format!("{name} is not a valid header value"))
        }

        let mut auth_headers = HeaderMap::with_capacity(4);
        auth_headers.insert(LOGIN, header_value("username", &config.username)?);
        auth_headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
        auth_headers.insert(CUSTOMER_URI, header_value("customer", &config.customer)?);

        let mut password = header_value("password", &config.password)?;
        password.set_sensitive(true);
        auth_headers.insert(PASSWORD, password);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .wrap_err("error creating HTTP client")?;

        Ok(Transport {
            client,
            auth_headers,
            debug: config.debug,
        })
    }

    /// The underlying HTTP client, used to build requests.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Overwrite the credential and content-type headers of a request.
    pub fn authorize(&self, req: &mut reqwest::Request) {
        let headers = req.headers_mut();

        for (name, value) in &self.auth_headers {
            headers.insert(name.clone(), value.clone());
        }
    }

    /// Send the request with credentials attached and buffer the whole response.
    pub async fn call(&self, mut req: reqwest::Request) -> eyre::Result<ApiResponse> {
        self.authorize(&mut req);

        log::debug!("Call endpoint: {} {}", req.method(), req.url());

        if self.debug {
            if let Some(body) = req.body().and_then(|body| body.as_bytes()) {
                log::debug!("Request body: {}", String::from_utf8_lossy(body));
            }
        }

        let res = self
            .client
            .execute(req)
            .await
            .wrap_err("error making request")?;

        let status = res.status();
        let headers = res.headers().clone();
        let body = res.text().await.wrap_err("error reading response body")?;

        if self.debug {
            log::debug!("Response status: {status}");
            log::debug!("Response body: {body}");
        }

        Ok(ApiResponse::new(status, headers, body))
    }
}
