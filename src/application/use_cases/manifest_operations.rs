use crate::domain::{
    clients::{MutationClient, StatusClient},
    entities::{AppStatus, OfficeApp},
};
use anyhow::Result;
use std::sync::Arc;

pub struct GetAllStatus {
    client: Arc<dyn StatusClient>,
}

impl GetAllStatus {
    pub fn new(client: Arc<dyn StatusClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self) -> Result<Vec<AppStatus>> {
        let apps = self.client.get_all_status().await?;
        tracing::debug!("Status reply: {:?}", apps);
        Ok(apps)
    }
}

pub struct InstallManifest {
    client: Arc<dyn MutationClient>,
}

impl InstallManifest {
    pub fn new(client: Arc<dyn MutationClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, app: OfficeApp) -> Result<String> {
        tracing::info!("Installing add-in for {}", app);
        self.client.install_manifest(app.token()).await
    }
}

pub struct UninstallManifest {
    client: Arc<dyn MutationClient>,
}

impl UninstallManifest {
    pub fn new(client: Arc<dyn MutationClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, app: OfficeApp) -> Result<String> {
        tracing::info!("Removing add-in from {}", app);
        self.client.uninstall_manifest(app.token()).await
    }
}

pub struct OpenOfficeApp {
    client: Arc<dyn MutationClient>,
}

impl OpenOfficeApp {
    pub fn new(client: Arc<dyn MutationClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, app: OfficeApp) -> Result<()> {
        tracing::info!("Opening {}", app);
        self.client.open_office_app(app.token()).await
    }
}
