pub mod app_state;
pub mod config;
pub mod office_app;

pub use app_state::{AllStatus, AppState, AppStatus, Availability, Outcome};
pub use config::{AppConfig, OutputFormat};
pub use office_app::OfficeApp;
