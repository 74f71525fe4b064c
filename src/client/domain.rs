use reqwest::{Method, StatusCode};

use crate::{
    api::{
        ApproveDelegationRequest, DelegateDomainRequest, Domain, DomainDetails, DomainRequest,
        ListDomainParams,
    },
    page::Page,
    req::Expect,
    Client,
};

impl Client {
    /// Create a domain. The API answers `201 Created` without a body.
    pub async fn create_domain(&self, domain: &DomainRequest) -> eyre::Result<()> {
        let req = self.request_json(Method::POST, "/api/domain/v1", domain)?;
        self.send(req, Expect::Status(StatusCode::CREATED)).await?;
        Ok(())
    }

    pub async fn delete_domain(&self, domain_id: i64) -> eyre::Result<()> {
        let req = self.request(Method::DELETE, &format!("/api/domain/v1/{domain_id}"))?;
        self.send(req, Expect::Status(StatusCode::NO_CONTENT))
            .await?;
        Ok(())
    }

    /// Approve the pending delegation of a domain to an organization.
    pub async fn approve_delegation(
        &self,
        domain_id: i64,
        approval: &ApproveDelegationRequest,
    ) -> eyre::Result<()> {
        let path = format!("/api/domain/v1/{domain_id}/delegation/approve");
        let req = self.request_json(Method::POST, &path, approval)?;
        self.send(req, Expect::Status(StatusCode::OK)).await?;
        Ok(())
    }

    /// Delegate one or more domains to an organization for the given certificate types.
    pub async fn delegate_domain(&self, delegation: &DelegateDomainRequest) -> eyre::Result<()> {
        let req = self.request_json(Method::POST, "/api/domain/v1/delegation", delegation)?;
        self.send(req, Expect::Status(StatusCode::OK)).await?;
        Ok(())
    }

    pub async fn domain_details(&self, domain_id: i64) -> eyre::Result<DomainDetails> {
        let req = self.request(Method::GET, &format!("/api/domain/v1/{domain_id}"))?;
        let res = self.send(req, Expect::Status(StatusCode::OK)).await?;
        res.json()
    }

    /// Fetch one page of domains.
    pub async fn list_domains(&self, params: &ListDomainParams) -> eyre::Result<Page<Domain>> {
        self.list(params).await
    }

    /// Fetch every domain matching the filters of `params`.
    pub async fn list_all_domains(&self, params: ListDomainParams) -> eyre::Result<Vec<Domain>> {
        self.list_all(params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::*,
        error::StatusError,
        test::{with_mock_server, Reply},
    };

    #[tokio::test]
    async fn test_domain_details() {
        let server = with_mock_server(|req| match (req.method.as_str(), req.path.as_str()) {
            ("GET", "/api/domain/v1/1") => Reply::json(
                200,
                r#"{
                    "id": 1,
                    "name": "example.com",
                    "delegationStatus": "ACTIVE",
                    "state": "ACTIVE",
                    "validationStatus": "VALIDATED",
                    "ctLogMonitoring": {"enabled": true, "includeSubdomains": false, "bucketId": "b1"},
                    "delegations": [{"orgId": 3, "certTypes": ["SSL"], "status": "ACTIVE"}]
                }"#,
            ),
            _ => Reply::status(404),
        });

        let details = server.client().domain_details(1).await.unwrap();
        assert_eq!(details.name, "example.com");
        assert_eq!(details.validation_status.as_deref(), Some("VALIDATED"));
        assert!(details.ct_log_monitoring.unwrap().enabled);
        assert_eq!(details.delegations[0].org_id, 3);
    }

    #[tokio::test]
    async fn test_domain_details_error() {
        let server = with_mock_server(|_| Reply::json(404, r#"{"description":"not found"}"#));
        let err = server.client().domain_details(1).await.unwrap_err();
        assert!(err.to_string().contains("status code: 404"));
    }

    #[tokio::test]
    async fn test_create_domain() {
        let server = with_mock_server(|req| match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/api/domain/v1") => Reply::status(201),
            _ => Reply::status(404),
        });

        let domain = DomainRequest {
            name: "ccmqa.com".to_owned(),
            description: "Domain description".to_owned(),
            active: true,
            delegations: vec![DelegationRequest {
                org_id: 1,
                cert_types: vec!["SSL".to_owned()],
            }],
        };

        server.client().create_domain(&domain).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
        assert_eq!(body["name"], "ccmqa.com");
        assert_eq!(body["delegations"][0]["orgId"], 1);
    }

    #[tokio::test]
    async fn test_create_domain_rejects_other_2xx() {
        let server = with_mock_server(|_| Reply::status(200));
        let err = server
            .client()
            .create_domain(&DomainRequest::default())
            .await
            .unwrap_err();

        let status_err = err.downcast_ref::<StatusError>().unwrap();
        assert_eq!(status_err.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_delete_domain() {
        let server = with_mock_server(|req| match (req.method.as_str(), req.path.as_str()) {
            ("DELETE", "/api/domain/v1/9") => Reply::status(204),
            _ => Reply::status(404),
        });

        server.client().delete_domain(9).await.unwrap();
        assert!(server.client().delete_domain(10).await.is_err());
    }

    #[tokio::test]
    async fn test_approve_delegation() {
        let server = with_mock_server(|req| match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/api/domain/v1/5/delegation/approve") => Reply::status(200),
            _ => Reply::status(404),
        });

        server
            .client()
            .approve_delegation(5, &ApproveDelegationRequest { org_id: 2 })
            .await
            .unwrap();
        assert_eq!(server.requests()[0].body, r#"{"orgId":2}"#);
    }

    #[tokio::test]
    async fn test_delegate_domain() {
        let server = with_mock_server(|req| match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/api/domain/v1/delegation") => Reply::status(200),
            _ => Reply::status(404),
        });

        let delegation = DelegateDomainRequest {
            domain_ids: vec![1, 2],
            org_id: 3,
            cert_types: vec!["SSL".to_owned()],
        };
        server.client().delegate_domain(&delegation).await.unwrap();
        assert_eq!(
            server.requests()[0].body,
            r#"{"domainIds":[1,2],"orgId":3,"certTypes":["SSL"]}"#
        );

        let server = with_mock_server(|_| Reply::json(400, "bad request"));
        let err = server
            .client()
            .delegate_domain(&delegation)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("status code: 400"));
    }

    #[tokio::test]
    async fn test_list_domains() {
        let server = with_mock_server(|_| {
            Reply::json(
                200,
                r#"[{"id":1,"name":"example.com"},{"id":2,"name":"example.org"}]"#,
            )
            .header("X-Total-Count", "2")
        });

        let params = ListDomainParams {
            size: 10,
            position: 0,
            name: Some("example".to_owned()),
            org_id: Some(4),
            ..Default::default()
        };

        let page = server.client().list_domains(&params).await.unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(page.items[1].name, "example.org");

        let req = &server.requests()[0];
        assert_eq!(req.path, "/api/domain/v1");
        assert_eq!(req.query_value("size").as_deref(), Some("10"));
        assert_eq!(req.query_value("position").as_deref(), Some("0"));
        assert_eq!(req.query_value("name").as_deref(), Some("example"));
        assert_eq!(req.query_value("orgId").as_deref(), Some("4"));
        assert_eq!(req.query_value("state"), None);
        assert_eq!(req.query_value("status"), None);
    }

    #[tokio::test]
    async fn test_list_all_domains() {
        let server = with_mock_server(|req| {
            let position: usize = req.query_value("position").unwrap().parse().unwrap();
            let size: usize = req.query_value("size").unwrap().parse().unwrap();
            let end = (position + size).min(450);

            let domains: Vec<_> = (position..end)
                .map(|id| serde_json::json!({ "id": id, "name": format!("d{id}.com") }))
                .collect();

            Reply::json(200, serde_json::to_string(&domains).unwrap())
                .header("X-Total-Count", "450")
        });

        let all = server
            .client()
            .list_all_domains(ListDomainParams::default())
            .await
            .unwrap();

        assert_eq!(all.len(), 450);
        assert_eq!(all[449].id, 449);

        let positions: Vec<_> = server
            .requests()
            .iter()
            .map(|req| req.query_value("position").unwrap())
            .collect();
        assert_eq!(positions, ["0", "200", "400"]);
        assert!(server
            .requests()
            .iter()
            .all(|req| req.query_value("size").as_deref() == Some("200")));
    }
}
