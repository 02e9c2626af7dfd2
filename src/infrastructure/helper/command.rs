use crate::domain::error::InstallerError;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

#[derive(Debug)]
pub struct HelperOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs the installer helper executable, one process per backend round trip.
#[derive(Debug, Clone)]
pub struct HelperCommand {
    program: String,
    base_args: Vec<String>,
}

impl HelperCommand {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }

    fn execute(&self, args: &[&str]) -> Result<HelperOutput> {
        tracing::debug!("Running: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to run installer helper `{}`", self.program))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            tracing::debug!("{} {} failed: {}", self.program, args.join(" "), stderr);
            let text = if stderr.is_empty() {
                match output.status.code() {
                    Some(code) => format!("{} exited with status {}", self.program, code),
                    None => format!("{} was terminated by a signal", self.program),
                }
            } else {
                stderr
            };
            return Err(InstallerError::Backend(text).into());
        }

        Ok(HelperOutput { stdout, stderr })
    }

    pub fn status(&self) -> Result<String> {
        let output = self.execute(&["status"])?;
        tracing::debug!("status returned {} bytes", output.stdout.len());
        Ok(output.stdout)
    }

    pub fn install(&self, app: &str) -> Result<HelperOutput> {
        self.execute(&["install", app])
    }

    pub fn uninstall(&self, app: &str) -> Result<HelperOutput> {
        self.execute(&["uninstall", app])
    }

    pub fn open(&self, app: &str) -> Result<HelperOutput> {
        self.execute(&["open", app])
    }
}
