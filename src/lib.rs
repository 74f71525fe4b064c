//! Client for the [Sectigo Certificate Manager](https://www.sectigo.com/) REST API.
//!
//! Covers the resource families used to keep an inventory of domains and certificates in sync:
//! domains and their delegations, domain control validation (DCV), organizations, ACME accounts
//! and SSL certificates.
//!
//! # Usage
//!
//! Build a [`Config`] with the API credentials and create a [`Client`] from it. The client is cheap
//! to clone and every operation is an `async fn` on it.
//!
//! ```no_run
//! # async fn run() -> eyre::Result<()> {
//! use sectigo::{api::ListDomainParams, Client, Config, ServerUrl};
//!
//! let config = Config::new(ServerUrl::CertManager, "api-user", "customer-uri", "secret");
//! let client = Client::new(config)?;
//!
//! let domains = client.list_all_domains(ListDomainParams::default()).await?;
//! println!("{} domains", domains.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Pagination
//!
//! List endpoints come in two flavours: `list_*` fetches a single [`Page`] using the window set on
//! its parameters and reports the server's total count; `list_all_*` walks every page,
//! [`PAGE_SIZE`] records at a time, and returns the concatenated records.
//!
//! # Errors
//!
//! Every operation returns an [`eyre::Result`]. A response with an unexpected status is reported
//! as a [`StatusError`] and a request rejected before sending is reported as a
//! [`ValidationError`]; both can be recovered with [`eyre::Report::downcast_ref()`].
//!
//! # Domain Validation
//!
//! CNAME validation is a three step flow: [`start_domain_cname_validation`] returns the record to
//! publish, [`submit_domain_cname_validation`] asks the API to look for it and
//! [`check_domain_validation_status`] polls until the domain leaves `NOT_VALIDATED`.
//!
//! [`start_domain_cname_validation`]: Client::start_domain_cname_validation()
//! [`submit_domain_cname_validation`]: Client::submit_domain_cname_validation()
//! [`check_domain_validation_status`]: Client::check_domain_validation_status()

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]

mod client;
mod config;
mod error;
mod req;
mod trans;

pub mod api;
pub mod page;


pub use crate::{
    client::Client,
    config::{Config, ServerUrl},
    error::{StatusError, ValidationError},
    page::{ListQuery, Page, Query, PAGE_SIZE},
    req::ApiResponse,
};
