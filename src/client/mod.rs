use std::sync::Arc;

use eyre::WrapErr as _;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;

use crate::{
    config::Config,
    page::{paginate, ListQuery, Page},
    req::{send_request, ApiResponse, Expect},
    trans::Transport,
};

mod acme;
mod dcv;
mod domain;
mod organization;
mod ssl;

#[derive(Debug)]
struct ClientInner {
    base_url: String,
    transport: Transport,
}

/// Client for a Certificate Manager API instance.
///
/// Created from a [`Config`] and cheap to clone; clones share one connection pool. Every
/// operation sends the configured credentials and checks the response status against the
/// one the endpoint documents, failing with a [`StatusError`] otherwise.
///
/// [`StatusError`]: crate::StatusError
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    pub fn new(config: Config) -> eyre::Result<Client> {
        Url::parse(&config.url).wrap_err_with(|| format!("invalid base URL: {}", config.url))?;

        let transport = Transport::new(&config)?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                base_url: config.url,
                transport,
            }),
        })
    }

    /// API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn is_debug(&self) -> bool {
        self.inner.transport.is_debug()
    }

    /// Fetch one page of a list endpoint.
    pub async fn list<P: ListQuery>(&self, params: &P) -> eyre::Result<Page<P::Item>> {
        let mut url = self.endpoint(&params.path())?;
        url.query_pairs_mut()
            .extend_pairs(params.to_query().pairs());

        let req = self.inner.transport.client().get(url);
        let res = self.send(req, Expect::Status(StatusCode::OK)).await?;

        Ok(Page {
            items: res.json()?,
            total_count: res.total_count(),
        })
    }

    /// Fetch every record of a list endpoint, 200 at a time.
    ///
    /// The window fields of `params` are overwritten.
    pub async fn list_all<P: ListQuery>(&self, params: P) -> eyre::Result<Vec<P::Item>> {
        paginate(params, |page| async move { self.list(&page).await }).await
    }

    /// Send an authenticated request to any API path and accept any 2xx status.
    ///
    /// For endpoints this crate does not model.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> eyre::Result<ApiResponse> {
        let mut req = self.request(method, path)?;

        if let Some(body) = body {
            req = req.json(body);
        }

        self.send(req, Expect::Success).await
    }

    fn endpoint(&self, path: &str) -> eyre::Result<Url> {
        let url = format!("{}{path}", self.inner.base_url);
        Url::parse(&url).wrap_err_with(|| format!("error parsing URL: {url}"))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> eyre::Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        Ok(self.inner.transport.client().request(method, url))
    }

    pub(crate) fn request_json<T>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> eyre::Result<RequestBuilder>
    where
        T: Serialize + ?Sized,
    {
        Ok(self.request(method, path)?.json(body))
    }

    pub(crate) async fn send(
        &self,
        req: RequestBuilder,
        expect: Expect,
    ) -> eyre::Result<ApiResponse> {
        let req = req.build().wrap_err("error creating request")?;
        send_request(&self.inner.transport, req, expect).await
    }
}
