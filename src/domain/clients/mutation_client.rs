use anyhow::Result;
use async_trait::async_trait;

/// Mutating backend operations. `app` is always the lower-case identity token.
#[async_trait]
pub trait MutationClient: Send + Sync {
    async fn install_manifest(&self, app: &str) -> Result<String>;
    async fn uninstall_manifest(&self, app: &str) -> Result<String>;
    async fn open_office_app(&self, app: &str) -> Result<()>;
}
