use reqwest::{Method, StatusCode};

use crate::{
    api::{
        AcmeAccount, AcmeAccountDomain, AddAcmeAccountDomainsRequest,
        ListAcmeAccountDomainParams, ListAcmeAccountParams,
    },
    page::Page,
    req::Expect,
    Client,
};

impl Client {
    /// Fetch one page of ACME accounts.
    pub async fn list_acme_accounts(
        &self,
        params: &ListAcmeAccountParams,
    ) -> eyre::Result<Page<AcmeAccount>> {
        self.list(params).await
    }

    /// Fetch every ACME account matching the filters of `params`.
    pub async fn list_all_acme_accounts(
        &self,
        params: ListAcmeAccountParams,
    ) -> eyre::Result<Vec<AcmeAccount>> {
        self.list_all(params).await
    }

    /// Fetch one page of the domains bound to an ACME account.
    pub async fn list_acme_account_domains(
        &self,
        params: &ListAcmeAccountDomainParams,
    ) -> eyre::Result<Page<AcmeAccountDomain>> {
        self.list(params).await
    }

    /// Fetch every domain bound to an ACME account.
    pub async fn list_all_acme_account_domains(
        &self,
        params: ListAcmeAccountDomainParams,
    ) -> eyre::Result<Vec<AcmeAccountDomain>> {
        self.list_all(params).await
    }

    /// Bind domains to an ACME account.
    pub async fn add_acme_account_domains<I, S>(
        &self,
        account_id: i64,
        domains: I,
    ) -> eyre::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = AddAcmeAccountDomainsRequest::from_names(domains);
        let path = format!("/api/acme/v2/account/{account_id}/domain");

        let req = self.request_json(Method::POST, &path, &body)?;
        self.send(req, Expect::Status(StatusCode::OK)).await?;
        Ok(())
    }
}
