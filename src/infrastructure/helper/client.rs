use crate::domain::{
    clients::{MutationClient, StatusClient},
    entities::{AllStatus, AppStatus},
    error::InstallerError,
};
use crate::infrastructure::helper::command::{HelperCommand, HelperOutput};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Backend installer service reached through the helper executable.
pub struct HelperClient {
    command: Arc<HelperCommand>,
}

impl HelperClient {
    pub fn new(command: HelperCommand) -> Self {
        Self {
            command: Arc::new(command),
        }
    }

    fn parse_status(json: &str) -> Result<Vec<AppStatus>> {
        let status: AllStatus = serde_json::from_str(json)
            .map_err(|e| InstallerError::MalformedStatus(e.to_string()))?;
        Ok(status.apps)
    }

    fn log_output(operation: &str, output: &HelperOutput) {
        if !output.stderr.is_empty() {
            tracing::info!("{} stderr: {}", operation, output.stderr);
        }
    }
}

#[async_trait]
impl StatusClient for HelperClient {
    async fn get_all_status(&self) -> Result<Vec<AppStatus>> {
        let command = Arc::clone(&self.command);
        let output = tokio::task::spawn_blocking(move || command.status()).await??;
        Self::parse_status(&output)
    }
}

#[async_trait]
impl MutationClient for HelperClient {
    async fn install_manifest(&self, app: &str) -> Result<String> {
        let command = Arc::clone(&self.command);
        let app = app.to_string();
        let output = tokio::task::spawn_blocking(move || command.install(&app)).await??;
        Self::log_output("install_manifest", &output);
        Ok(output.stdout)
    }

    async fn uninstall_manifest(&self, app: &str) -> Result<String> {
        let command = Arc::clone(&self.command);
        let app = app.to_string();
        let output = tokio::task::spawn_blocking(move || command.uninstall(&app)).await??;
        Self::log_output("uninstall_manifest", &output);
        Ok(output.stdout)
    }

    async fn open_office_app(&self, app: &str) -> Result<()> {
        let command = Arc::clone(&self.command);
        let app = app.to_string();
        let output = tokio::task::spawn_blocking(move || command.open(&app)).await??;
        Self::log_output("open_office_app", &output);
        Ok(())
    }
}
