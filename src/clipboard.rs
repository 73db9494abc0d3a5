//! Best-effort copy to the system clipboard.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Copies `text` to the clipboard.
///
/// Failures are logged at debug level and otherwise ignored. Platforms
/// without a known clipboard command are a no-op.
pub fn copy_to_clipboard(text: &str) {
    let Some((program, args)) = clipboard_command() else {
        log::debug!("No clipboard command for this platform");
        return;
    };

    if let Err(e) = pipe_to(program, args, text) {
        log::debug!("Clipboard copy with '{program}' failed: {e}");
    }
}

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];

fn clipboard_command() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "windows") {
        Some(("clip", NO_ARGS))
    } else if cfg!(target_os = "macos") {
        Some(("pbcopy", NO_ARGS))
    } else if cfg!(unix) {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Some(("wl-copy", NO_ARGS))
        } else {
            Some(("xclip", XCLIP_ARGS))
        }
    } else {
        None
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("exited with {status}")))
    }
}
