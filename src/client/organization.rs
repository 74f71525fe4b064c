use reqwest::{Method, StatusCode};

use crate::{api::Organization, req::Expect, Client};

impl Client {
    /// List the organizations visible to the configured account, with their departments.
    pub async fn list_organizations(&self) -> eyre::Result<Vec<Organization>> {
        let req = self.request(Method::GET, "/api/organization/v1")?;
        let res = self.send(req, Expect::Status(StatusCode::OK)).await?;
        res.json()
    }
}
