use serde_json::Value;

use crate::error::Result;
use crate::v1::LegacyClient;

impl LegacyClient {
    /// Company and user details for the authenticated credentials.
    pub async fn who_am_i(&self) -> Result<Value> {
        self.fetch("/account/who_am_i", &()).await
    }

    pub async fn rate_limit_status(&self) -> Result<Value> {
        self.fetch("/account/rate_limit_status", &()).await
    }
}
