use serde::{Deserialize, Serialize};

/// Result of the last operation on one application. Holding the message and the
/// error in one slot keeps them mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Message(String),
    Error(String),
}

/// How an application card should be offered, derived from the status fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    ComingSoon,
    OfficeMissing,
    Installable,
    Installed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub office_installed: bool,
    pub manifest_installed: bool,
    pub supported: bool,
    pub loading: bool,
    pub outcome: Option<Outcome>,
}

impl AppState {
    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Message(text)) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Error(text)) => Some(text),
            _ => None,
        }
    }

    pub fn availability(&self) -> Availability {
        match (self.supported, self.office_installed, self.manifest_installed) {
            (false, _, _) => Availability::ComingSoon,
            (true, false, _) => Availability::OfficeMissing,
            (true, true, false) => Availability::Installable,
            (true, true, true) => Availability::Installed,
        }
    }

    pub fn is_launchable(&self) -> bool {
        self.supported && self.office_installed
    }

    pub fn with_status(mut self, status: &AppStatus) -> Self {
        self.office_installed = status.office_installed;
        self.manifest_installed = status.manifest_installed;
        self.supported = status.supported;
        self
    }

    pub fn cleared(mut self) -> Self {
        self.outcome = None;
        self
    }

    pub fn started(mut self) -> Self {
        self.outcome = None;
        self.loading = true;
        self
    }

    pub fn succeeded(mut self, message: String) -> Self {
        self.outcome = Some(Outcome::Message(message));
        self.loading = false;
        self
    }

    pub fn failed(mut self, error: String) -> Self {
        self.outcome = Some(Outcome::Error(error));
        self.loading = false;
        self
    }

    /// Records an error without touching `loading`; launches never mark an app busy.
    pub fn with_error(mut self, error: String) -> Self {
        self.outcome = Some(Outcome::Error(error));
        self
    }
}

/// One entry of the backend's status reply. `app` is display-cased ("Excel").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStatus {
    pub app: String,
    pub office_installed: bool,
    pub manifest_installed: bool,
    pub supported: bool,
}

impl AppStatus {
    pub fn new(app: impl Into<String>, office_installed: bool, manifest_installed: bool, supported: bool) -> Self {
        Self {
            app: app.into(),
            office_installed,
            manifest_installed,
            supported,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllStatus {
    pub apps: Vec<AppStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_unqueried() {
        let state = AppState::default();
        assert!(!state.office_installed && !state.manifest_installed && !state.supported);
        assert!(!state.loading);
        assert_eq!(state.message(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_replaces_message() {
        let state = AppState::default()
            .started()
            .succeeded("done".to_string())
            .failed("boom".to_string());
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.message(), None);
        assert!(!state.loading);
    }

    #[test]
    fn started_clears_previous_outcome() {
        let state = AppState::default().failed("boom".to_string()).started();
        assert!(state.loading);
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn with_status_keeps_transient_fields() {
        let state = AppState::default()
            .started()
            .with_status(&AppStatus::new("Excel", true, true, true));
        assert!(state.loading);
        assert!(state.office_installed && state.manifest_installed && state.supported);
    }

    #[test]
    fn availability_follows_status() {
        let base = AppState::default();
        assert_eq!(base.availability(), Availability::ComingSoon);

        let missing = base.clone().with_status(&AppStatus::new("Word", false, false, true));
        assert_eq!(missing.availability(), Availability::OfficeMissing);
        assert!(!missing.is_launchable());

        let installable = base.clone().with_status(&AppStatus::new("Excel", true, false, true));
        assert_eq!(installable.availability(), Availability::Installable);
        assert!(installable.is_launchable());

        let installed = base.with_status(&AppStatus::new("Excel", true, true, true));
        assert_eq!(installed.availability(), Availability::Installed);
    }

    #[test]
    fn status_reply_parses_backend_json() {
        let json = r#"{"apps":[{"app":"Excel","office_installed":true,"manifest_installed":false,"supported":true}]}"#;
        let status: AllStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.apps, vec![AppStatus::new("Excel", true, false, true)]);
    }
}
