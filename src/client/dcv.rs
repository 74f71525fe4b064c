use std::time::Duration;

use reqwest::{Method, StatusCode};

use crate::{
    api::{
        CnameValidation, CnameValidationSubmission, DomainValidation, DomainValidationRequest,
        DomainValidationStatus, ListDomainValidationParams,
    },
    page::Page,
    req::Expect,
    Client,
};

impl Client {
    /// Start CNAME-based validation of a domain.
    ///
    /// Returns the record that must be published in DNS before calling
    /// [`submit_domain_cname_validation()`](Self::submit_domain_cname_validation()).
    pub async fn start_domain_cname_validation(
        &self,
        domain: &str,
    ) -> eyre::Result<CnameValidation> {
        self.post_validation("/api/dcv/v1/validation/start/domain/cname", domain)
            .await
    }

    /// Ask the API to check the published CNAME record of a domain.
    pub async fn submit_domain_cname_validation(
        &self,
        domain: &str,
    ) -> eyre::Result<CnameValidationSubmission> {
        self.post_validation("/api/dcv/v1/validation/submit/domain/cname", domain)
            .await
    }

    pub async fn domain_validation_status(
        &self,
        domain: &str,
    ) -> eyre::Result<DomainValidationStatus> {
        self.post_validation("/api/dcv/v2/validation/status", domain)
            .await
    }

    /// Poll the validation status of a domain until it leaves `NOT_VALIDATED`.
    ///
    /// Makes at most `max_retries` status calls, waiting `retry_interval` after each one that
    /// reports `NOT_VALIDATED`. Any other status ends the poll successfully and is returned;
    /// a failing status call ends it with that error.
    ///
    /// The wait is a timer on the async runtime, so dropping the returned future (e.g. through
    /// `tokio::time::timeout`) abandons the poll right away.
    pub async fn check_domain_validation_status(
        &self,
        domain: &str,
        max_retries: u32,
        retry_interval: Duration,
    ) -> eyre::Result<DomainValidationStatus> {
        for attempt in 1..=max_retries {
            let status = self.domain_validation_status(domain).await?;

            if !status.is_not_validated() {
                log::debug!("Domain {domain} reached status {}", status.status);
                return Ok(status);
            }

            log::debug!("{domain}: domain is not validated, retrying ({attempt}/{max_retries})");
            tokio::time::sleep(retry_interval).await;
        }

        Err(eyre::eyre!(
            "max retries reached, domain is still not validated"
        ))
    }

    /// Fetch one page of domain validations.
    pub async fn list_domain_validations(
        &self,
        params: &ListDomainValidationParams,
    ) -> eyre::Result<Page<DomainValidation>> {
        self.list(params).await
    }

    /// Fetch every domain validation matching the filters of `params`.
    pub async fn list_all_domain_validations(
        &self,
        params: ListDomainValidationParams,
    ) -> eyre::Result<Vec<DomainValidation>> {
        self.list_all(params).await
    }

    async fn post_validation<T>(&self, path: &str, domain: &str) -> eyre::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = DomainValidationRequest::new(domain);
        let req = self.request_json(Method::POST, path, &body)?;
        let res = self.send(req, Expect::Status(StatusCode::OK)).await?;
        res.json()
    }
}
