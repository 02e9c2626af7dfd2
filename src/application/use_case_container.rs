use crate::application::use_cases::*;
use crate::domain::clients::{MutationClient, StatusClient};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub get_all_status: Arc<GetAllStatus>,
    pub install: Arc<InstallManifest>,
    pub uninstall: Arc<UninstallManifest>,
    pub open_app: Arc<OpenOfficeApp>,
}

impl UseCaseContainer {
    pub fn new(
        status_client: Arc<dyn StatusClient>,
        mutation_client: Arc<dyn MutationClient>,
    ) -> Self {
        Self {
            get_all_status: Arc::new(GetAllStatus::new(status_client)),
            install: Arc::new(InstallManifest::new(Arc::clone(&mutation_client))),
            uninstall: Arc::new(UninstallManifest::new(Arc::clone(&mutation_client))),
            open_app: Arc::new(OpenOfficeApp::new(mutation_client)),
        }
    }
}
