//! System clipboard access through platform helper programs.
//!
//! Copying is best-effort: a failure is logged and reported as `false`,
//! never as an error.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Helper programs tried in order; each reads the text on stdin.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Copy `text` to the system clipboard. Returns whether any helper accepted it.
#[must_use]
pub fn copy_to_clipboard(text: &str) -> bool {
    for (program, args) in CLIPBOARD_COMMANDS {
        match pipe_to(program, args, text) {
            Ok(true) => {
                debug!(program, "Copied to clipboard");
                return true;
            }
            Ok(false) => debug!(program, "Clipboard helper exited with failure"),
            Err(e) => debug!(program, error = %e, "Clipboard helper unavailable"),
        }
    }

    warn!("Failed to copy: no clipboard helper available");
    false
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Close stdin before waiting; reap the child even if the write failed.
    let written = child
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));
    let status = child.wait()?;
    written?;

    Ok(status.success())
}
