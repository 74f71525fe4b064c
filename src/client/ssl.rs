use reqwest::{header::ACCEPT, Method, StatusCode};

use crate::{
    api::{ListSslParams, RevokeSslRequest, SslCertificate, SslDetails, UpdateSslDetailsRequest},
    page::Page,
    req::Expect,
    Client,
};

impl Client {
    /// Fetch one page of SSL certificates.
    pub async fn list_ssl(&self, params: &ListSslParams) -> eyre::Result<Page<SslCertificate>> {
        self.list(params).await
    }

    /// Fetch every SSL certificate matching the filters of `params`.
    pub async fn list_all_ssl(&self, params: ListSslParams) -> eyre::Result<Vec<SslCertificate>> {
        self.list_all(params).await
    }

    pub async fn ssl_details(&self, ssl_id: i64) -> eyre::Result<SslDetails> {
        let req = self.request(Method::GET, &format!("/api/ssl/v1/{ssl_id}"))?;
        let res = self.send(req, Expect::Status(StatusCode::OK)).await?;
        res.json()
    }

    /// Revoke a certificate.
    ///
    /// The reason must be between 1 and 512 characters; otherwise a [`ValidationError`] is
    /// returned and nothing is sent.
    ///
    /// [`ValidationError`]: crate::ValidationError
    pub async fn revoke_ssl(&self, ssl_id: i64, reason: &str) -> eyre::Result<()> {
        let body = RevokeSslRequest {
            reason: reason.to_owned(),
        };
        body.validate()?;

        let path = format!("/api/ssl/v1/revoke/{ssl_id}");
        let req = self.request_json(Method::POST, &path, &body)?;
        self.send(req, Expect::Status(StatusCode::NO_CONTENT))
            .await?;
        Ok(())
    }

    /// Update a certificate and return its new state.
    ///
    /// The request is checked with [`UpdateSslDetailsRequest::validate()`] first; a violation is
    /// returned as a [`ValidationError`] and nothing is sent.
    ///
    /// [`ValidationError`]: crate::ValidationError
    pub async fn update_ssl_details(
        &self,
        update: &UpdateSslDetailsRequest,
    ) -> eyre::Result<SslDetails> {
        update.validate()?;

        let req = self
            .request_json(Method::PUT, "/api/ssl/v1", update)?
            .header(ACCEPT, "application/json");
        let res = self.send(req, Expect::Status(StatusCode::OK)).await?;
        res.json()
    }
}
