use serde_json::Value;

use crate::error::Result;
use crate::v2::HarvestClient;

impl HarvestClient {
    /// The company the authenticated account belongs to.
    pub async fn company(&self) -> Result<Value> {
        self.fetch("/company").await
    }
}
