use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub helper_program: String,
    pub helper_args: Vec<String>,
    pub confirm_before_uninstall_all: bool,
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            helper_program: "addin-installer-helper".to_string(),
            helper_args: Vec::new(),
            confirm_before_uninstall_all: true,
            output: OutputFormat::Text,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}
