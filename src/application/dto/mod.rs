use crate::application::InstallerCoordinator;
use crate::domain::entities::{AppState, Availability, OfficeApp};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStateDto {
    pub app: String,
    pub office_installed: bool,
    pub manifest_installed: bool,
    pub supported: bool,
    pub loading: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub availability: String,
}

impl From<(OfficeApp, AppState)> for AppStateDto {
    fn from((app, state): (OfficeApp, AppState)) -> Self {
        Self {
            app: app.display_name().to_string(),
            office_installed: state.office_installed,
            manifest_installed: state.manifest_installed,
            supported: state.supported,
            loading: state.loading,
            message: state.message().map(str::to_string),
            error: state.error().map(str::to_string),
            availability: availability_label(state.availability()).to_string(),
        }
    }
}

pub fn availability_label(availability: Availability) -> &'static str {
    match availability {
        Availability::ComingSoon => "coming-soon",
        Availability::OfficeMissing => "office-missing",
        Availability::Installable => "installable",
        Availability::Installed => "installed",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDto {
    pub initial_loading: bool,
    pub refreshed_at: Option<DateTime<Local>>,
    pub apps: Vec<AppStateDto>,
    pub launchable_apps: Vec<String>,
    pub has_any_installed: bool,
}

impl From<&InstallerCoordinator> for SnapshotDto {
    fn from(coordinator: &InstallerCoordinator) -> Self {
        Self {
            initial_loading: coordinator.initial_loading(),
            refreshed_at: coordinator.refreshed_at(),
            apps: coordinator
                .snapshot()
                .into_iter()
                .map(AppStateDto::from)
                .collect(),
            launchable_apps: coordinator
                .launchable_apps()
                .into_iter()
                .map(|app| app.display_name().to_string())
                .collect(),
            has_any_installed: coordinator.has_any_installed(),
        }
    }
}
