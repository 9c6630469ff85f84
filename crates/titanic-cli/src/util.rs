use std::{path::Path, process::Command};

use anyhow::Context;
use titanic_chart::html::Document;

pub(crate) fn save_document(document: &Document, path: &Path) -> anyhow::Result<()> {
    document.save(path).with_context(|| {
        format!(
            "Failed to save chart '{}' to {}",
            document.figure().title(),
            path.display()
        )
    })
}

#[cfg(target_os = "macos")]
fn browser_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn browser_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn browser_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

/// Opens a written chart in the system browser.
///
/// Failing to launch the browser is not an error; the file is already on disk.
pub(crate) fn open_in_browser(path: &Path) {
    match browser_command(path).status() {
        Ok(status) if status.success() => {
            tracing::debug!(path = %path.display(), "opened in browser");
        }
        Ok(status) => {
            tracing::warn!(path = %path.display(), %status, "browser command failed");
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to launch browser");
        }
    }
}
