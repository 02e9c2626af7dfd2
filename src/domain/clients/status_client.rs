use crate::domain::entities::AppStatus;
use anyhow::Result;
use async_trait::async_trait;

/// Read-only view of the backend installer service. Must be side-effect free.
#[async_trait]
pub trait StatusClient: Send + Sync {
    async fn get_all_status(&self) -> Result<Vec<AppStatus>>;
}
