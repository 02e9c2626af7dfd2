use crate::application::UseCaseContainer;
use crate::application::event_bus::{CoordinatorEvent, EventBus};
use crate::domain::entities::{AppState, OfficeApp};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct CoordinatorState {
    apps: BTreeMap<OfficeApp, AppState>,
    initial_loading: bool,
    refreshed_at: Option<DateTime<Local>>,
    bulk_running: bool,
}

#[derive(Clone, Copy)]
enum Mutation {
    Install,
    Uninstall,
}

/// Owns the per-application state and is the only thing that writes it.
///
/// Every backend failure is caught here and stored as the affected application's
/// `error`; no operation returns an error to its caller. The lock is never held across
/// a backend call, so operations may be started concurrently from one task.
pub struct InstallerCoordinator {
    use_cases: Arc<UseCaseContainer>,
    state: Mutex<CoordinatorState>,
    events: EventBus,
}

impl InstallerCoordinator {
    pub fn new(use_cases: Arc<UseCaseContainer>, events: EventBus) -> Self {
        let apps = OfficeApp::ALL
            .into_iter()
            .map(|app| (app, AppState::default()))
            .collect();

        Self {
            use_cases,
            state: Mutex::new(CoordinatorState {
                apps,
                initial_loading: true,
                refreshed_at: None,
                bulk_running: false,
            }),
            events,
        }
    }

    /// Builds the coordinator and performs the first status query.
    pub async fn initialize(use_cases: Arc<UseCaseContainer>, events: EventBus) -> Self {
        let coordinator = Self::new(use_cases, events);
        coordinator.refresh_status().await;
        coordinator
    }

    fn lock(&self) -> MutexGuard<'_, CoordinatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces one application's record with `f(current)` and announces it.
    fn update<F>(&self, app: OfficeApp, f: F) -> AppState
    where
        F: FnOnce(AppState) -> AppState,
    {
        let next = {
            let mut state = self.lock();
            let current = state.apps.get(&app).cloned().unwrap_or_default();
            let next = f(current);
            state.apps.insert(app, next.clone());
            next
        };
        self.events
            .publish(CoordinatorEvent::AppChanged(app, next.clone()));
        next
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn app_state(&self, app: OfficeApp) -> AppState {
        self.lock().apps.get(&app).cloned().unwrap_or_default()
    }

    /// Every application in fixed order.
    pub fn snapshot(&self) -> Vec<(OfficeApp, AppState)> {
        self.lock()
            .apps
            .iter()
            .map(|(app, state)| (*app, state.clone()))
            .collect()
    }

    pub fn initial_loading(&self) -> bool {
        self.lock().initial_loading
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.lock().refreshed_at
    }

    pub fn launchable_apps(&self) -> Vec<OfficeApp> {
        self.lock()
            .apps
            .iter()
            .filter(|(_, state)| state.is_launchable())
            .map(|(app, _)| *app)
            .collect()
    }

    pub fn has_any_installed(&self) -> bool {
        self.lock().apps.values().any(|state| state.manifest_installed)
    }

    /// Re-reads backend status. Returns whether the reply was applied; on failure the
    /// cached status fields are left exactly as they were.
    pub async fn refresh_status(&self) -> bool {
        let ok = match self.use_cases.get_all_status.execute().await {
            Ok(reports) => {
                let changed: Vec<(OfficeApp, AppState)> = {
                    let mut state = self.lock();
                    let mut changed = Vec::with_capacity(reports.len());
                    for report in &reports {
                        let Some(app) = OfficeApp::from_display_name(&report.app) else {
                            tracing::warn!("Ignoring status for unknown application {:?}", report.app);
                            continue;
                        };
                        let next = state
                            .apps
                            .get(&app)
                            .cloned()
                            .unwrap_or_default()
                            .with_status(report);
                        state.apps.insert(app, next.clone());
                        changed.push((app, next));
                    }
                    state.refreshed_at = Some(Local::now());
                    changed
                };
                for (app, next) in changed {
                    self.events.publish(CoordinatorEvent::AppChanged(app, next));
                }
                true
            }
            Err(e) => {
                tracing::warn!("Status refresh failed, keeping last known state: {:#}", e);
                false
            }
        };

        self.lock().initial_loading = false;
        self.events.publish(CoordinatorEvent::StatusRefreshed { ok });
        ok
    }

    pub async fn install(&self, app: OfficeApp) -> AppState {
        self.run_mutation(app, Mutation::Install).await
    }

    pub async fn uninstall(&self, app: OfficeApp) -> AppState {
        self.run_mutation(app, Mutation::Uninstall).await
    }

    async fn run_mutation(&self, app: OfficeApp, mutation: Mutation) -> AppState {
        self.update(app, AppState::started);

        let result = match mutation {
            Mutation::Install => self.use_cases.install.execute(app).await,
            Mutation::Uninstall => self.use_cases.uninstall.execute(app).await,
        };

        match result {
            Ok(message) => {
                tracing::info!("{}: {}", app, message);
                self.update(app, |state| state.succeeded(message));
                self.refresh_status().await;
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!("{} failed: {}", app, error);
                self.update(app, |state| state.failed(error));
            }
        }

        self.app_state(app)
    }

    /// Uninstalls every application whose manifest is installed, one at a time in fixed
    /// order, each including its status refresh before the next starts.
    ///
    /// Targets are chosen when the call starts. A target that is already busy when its
    /// turn comes is skipped, and a call made while another is running does nothing.
    /// Returns the applications that were actually processed.
    pub async fn uninstall_all(&self) -> Vec<OfficeApp> {
        let targets: Vec<OfficeApp> = {
            let mut state = self.lock();
            if state.bulk_running {
                tracing::warn!("Uninstall all is already running, ignoring");
                return Vec::new();
            }
            state.bulk_running = true;
            state
                .apps
                .iter()
                .filter(|(_, app_state)| app_state.manifest_installed)
                .map(|(app, _)| *app)
                .collect()
        };
        let _guard = BulkGuard(self);

        tracing::info!("Uninstalling from {} application(s)", targets.len());
        self.events
            .publish(CoordinatorEvent::BulkStarted(targets.clone()));

        let mut processed = Vec::with_capacity(targets.len());
        for app in targets {
            if self.app_state(app).loading {
                tracing::info!("Skipping {}, another operation is in flight", app);
                continue;
            }
            self.uninstall(app).await;
            processed.push(app);
        }

        self.events.publish(CoordinatorEvent::BulkFinished);
        processed
    }

    /// Asks the backend to launch the application. Does not mark it busy or refresh.
    pub async fn open_app(&self, app: OfficeApp) -> AppState {
        self.update(app, AppState::cleared);

        match self.use_cases.open_app.execute(app).await {
            Ok(()) => self.app_state(app),
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!("Could not open {}: {}", app, error);
                self.update(app, |state| state.with_error(error))
            }
        }
    }
}

/// Clears the bulk flag even if an `uninstall_all` future is dropped part way.
struct BulkGuard<'a>(&'a InstallerCoordinator);

impl Drop for BulkGuard<'_> {
    fn drop(&mut self) {
        self.0.lock().bulk_running = false;
    }
}
