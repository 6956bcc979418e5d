//! Harvest API v2 (`https://api.harvestapp.com/v2`).

pub mod assignments;
pub mod client;
pub mod clients;
pub mod company;
pub mod contacts;
pub mod expenses;
pub mod invoices;
pub mod projects;
pub mod roles;
pub mod tasks;
pub mod time_entries;
pub mod users;

pub use assignments::*;
pub use client::HarvestClient;
pub use clients::*;
pub use contacts::*;
pub use expenses::*;
pub use invoices::*;
pub use projects::*;
pub use roles::*;
pub use tasks::*;
pub use time_entries::*;
pub use users::*;
