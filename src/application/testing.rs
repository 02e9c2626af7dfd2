//! In-process backend used by the coordinator and CLI tests.

use crate::domain::{
    clients::{MutationClient, StatusClient},
    entities::{AppStatus, OfficeApp},
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tokio::sync::oneshot;

#[derive(Default)]
struct BackendState {
    office: HashSet<OfficeApp>,
    manifests: HashSet<OfficeApp>,
    supported: HashSet<OfficeApp>,
    status_fails: bool,
    rejections: HashMap<String, String>,
    gate: Option<(oneshot::Sender<()>, oneshot::Receiver<()>)>,
    calls: Vec<String>,
}

/// Simulates the installer service: install/uninstall flip the manifest flag and
/// status reports whatever the flags currently are.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<BackendState>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(self, app: OfficeApp, office: bool, manifest: bool, supported: bool) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            set_flag(&mut state.office, app, office);
            set_flag(&mut state.manifests, app, manifest);
            set_flag(&mut state.supported, app, supported);
        }
        self
    }

    pub fn fail_status(&self, fails: bool) {
        self.state.lock().unwrap().status_fails = fails;
    }

    /// Makes the next call whose label is `call` (e.g. "install excel") fail with `error`.
    pub fn reject(&self, call: &str, error: &str) {
        self.state
            .lock()
            .unwrap()
            .rejections
            .insert(call.to_string(), error.to_string());
    }

    /// Holds the next mutation open: `entered` fires once the call is in flight and
    /// the call completes only after `release` is sent.
    pub fn gate_next(&self) -> (oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        self.state.lock().unwrap().gate = Some((entered_tx, release_rx));
        (entered_rx, release_tx)
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    async fn enter(&self, call: String) -> Result<()> {
        let gate = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call.clone());
            state.gate.take()
        };
        if let Some((entered, release)) = gate {
            let _ = entered.send(());
            let _ = release.await;
        }
        match self.state.lock().unwrap().rejections.remove(&call) {
            Some(error) => Err(anyhow!(error)),
            None => Ok(()),
        }
    }
}

fn set_flag(set: &mut HashSet<OfficeApp>, app: OfficeApp, on: bool) {
    if on {
        set.insert(app);
    } else {
        set.remove(&app);
    }
}

fn parse(token: &str) -> Result<OfficeApp> {
    token.parse().map_err(|e| anyhow!("{}", e))
}

#[async_trait]
impl StatusClient for FakeBackend {
    async fn get_all_status(&self) -> Result<Vec<AppStatus>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("status".to_string());
        if state.status_fails {
            return Err(anyhow!("connection refused"));
        }
        Ok(OfficeApp::ALL
            .into_iter()
            .map(|app| {
                AppStatus::new(
                    app.display_name(),
                    state.office.contains(&app),
                    state.manifests.contains(&app),
                    state.supported.contains(&app),
                )
            })
            .collect())
    }
}

#[async_trait]
impl MutationClient for FakeBackend {
    async fn install_manifest(&self, app: &str) -> Result<String> {
        self.enter(format!("install {}", app)).await?;
        let app = parse(app)?;
        self.state.lock().unwrap().manifests.insert(app);
        Ok("Installed successfully".to_string())
    }

    async fn uninstall_manifest(&self, app: &str) -> Result<String> {
        self.enter(format!("uninstall {}", app)).await?;
        let app = parse(app)?;
        self.state.lock().unwrap().manifests.remove(&app);
        Ok(format!("Removed from {}", app))
    }

    async fn open_office_app(&self, app: &str) -> Result<()> {
        self.enter(format!("open {}", app)).await?;
        parse(app).map(|_| ())
    }
}
