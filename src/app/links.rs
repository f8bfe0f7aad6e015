use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::App;

impl App {
    /// Open a map link with `open_command` (spawned, not awaited)
    pub(crate) fn open_link(&mut self, link: &str) {
        let Some(open_cmd) = self.config.open_command.clone() else {
            self.model
                .show_toast("Error: open_command not configured".to_string());
            return;
        };

        // Detached so a browser doesn't block the TUI; reaped in the background
        let result = Command::new(&open_cmd)
            .arg(link)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(mut child) => {
                debug!("open_command: spawned {} {}", open_cmd, link);
                tokio::task::spawn_blocking(move || child.wait());
                self.model.show_toast(format!("Opened: {}", link));
            }
            Err(e) => {
                warn!("Failed to execute open_command '{}': {}", open_cmd, e);
                self.model
                    .show_toast(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }

    /// Pipe a map link into `clipboard_command`
    pub(crate) fn copy_link(&mut self, link: &str) {
        let Some(clip_cmd) = self.config.clipboard_command.clone() else {
            self.model
                .show_toast("Error: clipboard_command not configured".to_string());
            return;
        };

        match pipe_to_program(&clip_cmd, link) {
            Ok(_reaper) => {
                debug!("clipboard_command: piped {} bytes to {}", link.len(), clip_cmd);
                self.model.show_toast(format!("Copied: {}", link));
            }
            Err(e) => {
                warn!("Failed to execute clipboard_command '{}': {}", clip_cmd, e);
                self.model
                    .show_toast(format!("Error: Failed to copy with '{}'", clip_cmd));
            }
        }
    }
}

/// Spawn `program`, write `input` to its stdin and close it
///
/// The child is waited on by a blocking task in every case, including a
/// failed write, so the UI loop never blocks and no zombie is left behind.
/// A non-zero exit is logged by that task.
fn pipe_to_program(program: &str, input: &str) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Dropping stdin at the end of the arm signals EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    };
    if written.is_err() {
        let _ = child.kill();
    }

    let program = program.to_string();
    let reaper = tokio::task::spawn_blocking(move || {
        let status = child.wait()?;
        if !status.success() {
            warn!("'{}' exited with {}", program, status);
        }
        Ok(status)
    });

    written.map(|()| reaper)
}
