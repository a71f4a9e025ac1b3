//! Best-effort chart display
//!
//! Hands saved images to the platform's default viewer. Nothing here can fail
//! the run: a missing display or viewer only produces a log message.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Check if a display surface is likely to be available
pub fn display_available() -> bool {
    if cfg!(any(target_os = "macos", windows)) {
        return true;
    }
    has_display(
        std::env::var_os("DISPLAY").as_deref(),
        std::env::var_os("WAYLAND_DISPLAY").as_deref(),
    )
}

fn has_display(x11: Option<&OsStr>, wayland: Option<&OsStr>) -> bool {
    [x11, wayland]
        .into_iter()
        .flatten()
        .any(|value| !value.is_empty())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Open `path` in an image viewer if a display is available
pub fn show_image(path: &Path) {
    if !display_available() {
        log::debug!("No display available, not showing {:?}", path);
        return;
    }

    let spawned = viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => log::debug!("Opened {:?} in image viewer", path),
        Err(e) => log::warn!("Could not open {:?} in an image viewer: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_display() {
        assert!(has_display(Some(OsStr::new(":0")), None));
        assert!(has_display(None, Some(OsStr::new("wayland-0"))));
        assert!(!has_display(None, None));
        assert!(!has_display(Some(OsStr::new("")), None));
    }

    #[test]
    fn test_viewer_command_targets_image() {
        let cmd = viewer_command(Path::new("loop_execution_time.png"));
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args.last(), Some(&OsStr::new("loop_execution_time.png")));
    }
}
