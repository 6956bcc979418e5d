//! Legacy Harvest API v1 (`https://{account}.harvestapp.com`, HTTP Basic auth).

pub mod account;
pub mod billing;
pub mod client;
pub mod clients;
pub mod people;
pub mod projects;
pub mod timesheets;

pub use billing::*;
pub use client::LegacyClient;
pub use clients::*;
pub use people::*;
pub use projects::*;
pub use timesheets::*;
