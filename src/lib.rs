//! Async client for the Harvest time-tracking REST API.
//!
//! [`HarvestClient`] speaks the current v2 API (Bearer token plus
//! `Harvest-Account-Id`), [`LegacyClient`] the account-subdomain v1 API
//! (Basic auth). Both return Harvest's JSON documents unchanged.

pub mod config;
pub mod error;
mod http;
pub mod params;
pub mod v1;
pub mod v2;

pub use config::Config;
pub use error::{HarvestError, Result};
pub use params::ListOptions;
pub use v1::LegacyClient;
pub use v2::HarvestClient;
