//! JSON API payloads and list query parameters.
//!
//! Request and response shapes of the Certificate Manager REST API, one module per resource
//! family. Response types are lenient: fields the server leaves out take their default value.

mod acme;
mod dcv;
mod domain;
mod organization;
mod ssl;

pub use self::{
    acme::{
        AcmeAccount, AcmeAccountDomain, AcmeAccountDomainName, AddAcmeAccountDomainsRequest,
        ListAcmeAccountDomainParams, ListAcmeAccountParams,
    },
    dcv::{
        CnameValidation, CnameValidationSubmission, DomainValidation, DomainValidationRequest,
        DomainValidationStatus, ListDomainValidationParams, NOT_VALIDATED,
    },
    domain::{
        ApproveDelegationRequest, CtLogMonitoring, DelegateDomainRequest, Delegation,
        DelegationRequest, Domain, DomainDetails, DomainRequest, ListDomainParams,
    },
    organization::{Department, Organization},
    ssl::{
        AutoInstallDetails, AutoRenewDetails, CertType, CertificateDetails, CustomField,
        KeyTypes, ListSslParams, NodeInfo, RevokeSslRequest, SslCertificate, SslDetails,
        UpdateSslDetailsRequest, AUTO_RENEW_NOT_SCHEDULED, AUTO_RENEW_SCHEDULED,
    },
};
