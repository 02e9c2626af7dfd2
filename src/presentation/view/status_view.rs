use crate::application::dto::{AppStateDto, SnapshotDto};
use std::fmt::Write;

const NAME_WIDTH: usize = 12;
const STATE_WIDTH: usize = 16;

fn state_label(app: &AppStateDto) -> &'static str {
    if app.loading {
        return "working...";
    }
    match app.availability.as_str() {
        "coming-soon" => "coming soon",
        "office-missing" => "not installed",
        "installable" => "ready to install",
        "installed" => "installed",
        _ => "unknown",
    }
}

/// Plain-text table of every application followed by the launchable summary.
pub fn render_text(snapshot: &SnapshotDto) -> String {
    let mut out = String::new();

    for app in &snapshot.apps {
        let _ = write!(
            out,
            "{:<name$}{:<state$}",
            app.app,
            state_label(app),
            name = NAME_WIDTH,
            state = STATE_WIDTH
        );
        if let Some(message) = &app.message {
            let _ = write!(out, "{}", message);
        } else if let Some(error) = &app.error {
            let _ = write!(out, "error: {}", error);
        }
        out = out.trim_end().to_string();
        out.push('\n');
    }

    if snapshot.launchable_apps.is_empty() {
        out.push_str("No supported Office application found\n");
    } else {
        let _ = writeln!(out, "Launchable: {}", snapshot.launchable_apps.join(", "));
    }

    match snapshot.refreshed_at {
        Some(at) => {
            let _ = writeln!(out, "Status as of {}", at.format("%Y-%m-%d %H:%M:%S"));
        }
        None => out.push_str("Status unavailable, showing defaults\n"),
    }

    out
}
