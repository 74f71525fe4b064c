use std::{env, fmt, time::Duration};

use zeroize::Zeroizing;

const CERT_MANAGER_URL: &str = "https://cert-manager.com";
const CERT_MANAGER_EU_URL: &str = "https://eu.cert-manager.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Enumeration of known Certificate Manager API hosts.
#[derive(Debug, Clone)]
pub enum ServerUrl<'a> {
    /// The main Sectigo Certificate Manager instance.
    CertManager,

    /// The EU-hosted Sectigo Certificate Manager instance.
    CertManagerEu,

    /// Provide an arbitrary base URL to connect to.
    ///
    /// Useful for private instances and for pointing the client at a mock server.
    Other(&'a str),
}

impl<'a> ServerUrl<'a> {
    fn to_url(&self) -> &str {
        match self {
            ServerUrl::CertManager => CERT_MANAGER_URL,
            ServerUrl::CertManagerEu => CERT_MANAGER_EU_URL,
            ServerUrl::Other(url) => url,
        }
    }
}

/// Connection settings consumed by [`Client::new()`].
///
/// The three credentials are sent as static headers on every request:
/// `login`, `customerUri` and `password`.
///
/// [`Client::new()`]: crate::Client::new()
#[derive(Clone)]
pub struct Config {
    pub(crate) url: String,
    pub(crate) username: String,
    pub(crate) customer: String,
    pub(crate) password: Zeroizing<String>,
    pub(crate) debug: bool,
    pub(crate) timeout: Duration,
}

impl Config {
    pub fn new(
        url: ServerUrl<'_>,
        username: impl Into<String>,
        customer: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.to_url().trim_end_matches('/').to_owned(),
            username: username.into(),
            customer: customer.into(),
            password: Zeroizing::new(password.into()),
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads settings from the process environment.
    ///
    /// | Variable           | Required | Meaning                               |
    /// |--------------------|----------|---------------------------------------|
    /// | `SECTIGO_URL`      | yes      | API base URL                          |
    /// | `SECTIGO_USERNAME` | yes      | value of the `login` header           |
    /// | `SECTIGO_CUSTOMER` | yes      | value of the `customerUri` header     |
    /// | `SECTIGO_PASSWORD` | yes      | value of the `password` header        |
    /// | `SECTIGO_DEBUG`    | no       | `1` or `true` enables body logging    |
    pub fn from_env() -> eyre::Result<Self> {
        fn required(name: &str) -> eyre::Result<String> {
            env::var(name).map_err(|err| eyre::eyre!("{name}: {err}"))
        }

        let url = required("SECTIGO_URL")?;

        let debug = env::var("SECTIGO_DEBUG")
            .map(|val| matches!(val.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);

        let config = Config::new(
            ServerUrl::Other(&url),
            required("SECTIGO_USERNAME")?,
            required("SECTIGO_CUSTOMER")?,
            required("SECTIGO_PASSWORD")?,
        )
        .debug(debug);

        Ok(config)
    }

    /// Log request and response bodies at `debug` level.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Overall timeout applied to each HTTP request. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// API base URL, without a trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("customer", &self.customer)
            .field("password", &"<redacted>")
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}
