use serde::{Deserialize, Serialize};

use crate::page::{ListQuery, Query};

/// Payload for creating a domain.
///
/// # Example JSON
///
/// ```json
/// {
///   "name": "ccmqa.com",
///   "description": "Domain description",
///   "active": true,
///   "delegations": [
///     { "orgId": 1, "certTypes": ["SSL"] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRequest {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub delegations: Vec<DelegationRequest>,
}

/// Delegation of a domain to an organization, as sent when creating a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationRequest {
    pub org_id: i64,

    /// Certificate types the organization may request, e.g. `SSL`, `SMIME`, `CodeSign`.
    pub cert_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveDelegationRequest {
    pub org_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateDomainRequest {
    pub domain_ids: Vec<i64>,
    pub org_id: i64,
    pub cert_types: Vec<String>,
}

/// A domain as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub id: i64,
    pub name: String,
}

/// The full record of a domain.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": 1,
///   "name": "example.com",
///   "delegationStatus": "ACTIVE",
///   "state": "ACTIVE",
///   "validationStatus": "VALIDATED",
///   "validationMethod": "CNAME",
///   "dcvValidation": "2024-01-01",
///   "dcvExpiration": "2025-01-01",
///   "ctLogMonitoring": {
///     "enabled": true,
///     "includeSubdomains": true,
///     "bucketId": "bucket-1"
///   },
///   "delegations": [
///     { "orgId": 1, "certTypes": ["SSL"], "status": "ACTIVE" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainDetails {
    pub id: i64,
    pub name: String,
    pub delegation_status: Option<String>,
    pub state: Option<String>,
    pub validation_status: Option<String>,
    pub validation_method: Option<String>,
    pub dcv_validation: Option<String>,
    pub dcv_expiration: Option<String>,
    pub ct_log_monitoring: Option<CtLogMonitoring>,
    pub delegations: Vec<Delegation>,
}

/// Certificate Transparency log monitoring settings of a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtLogMonitoring {
    pub enabled: bool,
    pub include_subdomains: bool,
    pub bucket_id: Option<String>,
}

/// Delegation of a domain to an organization, as reported in [`DomainDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Delegation {
    pub org_id: i64,
    pub cert_types: Vec<String>,
    pub status: Option<String>,
}

/// Query for listing domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainParams {
    pub size: u32,
    pub position: u32,
    pub name: Option<String>,
    pub state: Option<String>,
    pub status: Option<String>,
    pub org_id: Option<i64>,
}

impl ListQuery for ListDomainParams {
    type Item = Domain;

    fn path(&self) -> String {
        "/api/domain/v1".to_owned()
    }

    fn set_window(&mut self, position: u32, size: u32) {
        self.position = position;
        self.size = size;
    }

    fn query(&self, query: &mut Query) {
        query.push("size", self.size);
        query.push("position", self.position);
        query.push_opt("name", self.name.as_ref());
        query.push_opt("state", self.state.as_ref());
        query.push_opt("status", self.status.as_ref());
        query.push_opt("orgId", self.org_id.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_request_json() {
        let req = DomainRequest {
            name: "ccmqa.com".to_owned(),
            description: "Domain description".to_owned(),
            active: true,
            delegations: vec![DelegationRequest {
                org_id: 1,
                cert_types: vec!["SSL".to_owned()],
            }],
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "name": "ccmqa.com",
                "description": "Domain description",
                "active": true,
                "delegations": [{ "orgId": 1, "certTypes": ["SSL"] }]
            })
        );
    }

    #[test]
    fn domain_details_tolerates_missing_fields() {
        let details: DomainDetails =
            serde_json::from_str(r#"{"id": 7, "name": "example.com", "state": null}"#).unwrap();

        assert_eq!(details.id, 7);
        assert_eq!(details.name, "example.com");
        assert!(details.state.is_none());
        assert!(details.ct_log_monitoring.is_none());
        assert!(details.delegations.is_empty());
    }

    #[test]
    fn list_query_omits_unset_filters() {
        let params = ListDomainParams {
            size: 10,
            position: 20,
            ..Default::default()
        };

        let query = params.to_query();
        assert_eq!(query.get("size"), Some("10"));
        assert_eq!(query.get("position"), Some("20"));
        assert_eq!(query.pairs().len(), 2);
    }

    #[test]
    fn list_query_omits_blank_filters() {
        let params = ListDomainParams {
            name: Some(String::new()),
            state: Some(String::new()),
            org_id: Some(0),
            ..Default::default()
        };

        let query = params.to_query();
        assert_eq!(
            query.pairs(),
            [("size", "0".to_owned()), ("position", "0".to_owned())]
        );
    }

    #[test]
    fn list_query_includes_set_filters() {
        let params = ListDomainParams {
            name: Some("example.com".to_owned()),
            state: Some("ACTIVE".to_owned()),
            status: Some("VALIDATED".to_owned()),
            org_id: Some(5),
            ..Default::default()
        };

        let query = params.to_query();
        assert_eq!(query.get("name"), Some("example.com"));
        assert_eq!(query.get("state"), Some("ACTIVE"));
        assert_eq!(query.get("status"), Some("VALIDATED"));
        assert_eq!(query.get("orgId"), Some("5"));
        assert_eq!(query.pairs().iter().filter(|(k, _)| *k == "orgId").count(), 1);
    }
}
