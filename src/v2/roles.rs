use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::params::ListOptions;
use crate::v2::HarvestClient;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleParams {
    pub name: Option<String>,
    /// Replaces the full membership of the role.
    pub user_ids: Option<Vec<u64>>,
}

impl HarvestClient {
    pub async fn list_roles(&self, paging: &ListOptions) -> Result<Value> {
        self.fetch_with("/roles", paging).await
    }

    pub async fn get_role(&self, role_id: u64) -> Result<Value> {
        self.fetch(&format!("/roles/{}", role_id)).await
    }

    pub async fn create_role(&self, params: &RoleParams) -> Result<Value> {
        self.create("/roles", params, &["name"]).await
    }

    pub async fn update_role(&self, role_id: u64, params: &RoleParams) -> Result<Value> {
        self.update(&format!("/roles/{}", role_id), params).await
    }

    pub async fn delete_role(&self, role_id: u64) -> Result<Value> {
        self.remove(&format!("/roles/{}", role_id)).await
    }
}
