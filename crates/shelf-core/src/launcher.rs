//! Cross-platform launch dispatcher.
//!
//! A launch is fire-and-forget: the platform's open mechanism is started as a
//! child process with the console streams inherited, a background thread
//! reaps it, and control returns to the caller immediately.

use crate::error::{Result, ShelfError};
use crate::platform::{self, Platform};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Something that can launch a shelf entry's target.
///
/// Front ends depend on this trait so they can be driven without touching
/// the OS.
pub trait Launcher {
    fn launch(&self, target: &Path) -> Result<()>;
}

/// How a target is handed to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStrategy {
    /// `cmd /c start "" <target>`, with `cmd` resolved on `PATH`.
    ShellStart,
    /// `open <target>`.
    NativeOpen,
    /// `xdg-open <target>`.
    DesktopOpen,
}

impl LaunchStrategy {
    /// Pick the strategy for a platform's capabilities.
    pub fn for_platform(platform: Platform) -> Self {
        if platform.opens_via_shell() {
            LaunchStrategy::ShellStart
        } else if platform.has_native_open_command() {
            LaunchStrategy::NativeOpen
        } else {
            LaunchStrategy::DesktopOpen
        }
    }

    /// Program name of the open mechanism.
    pub fn program(&self) -> &'static str {
        match self {
            LaunchStrategy::ShellStart => "cmd",
            LaunchStrategy::NativeOpen => "open",
            LaunchStrategy::DesktopOpen => "xdg-open",
        }
    }

    /// Build the command that opens `target`.
    pub fn command(&self, target: &Path) -> Result<Command> {
        match self {
            LaunchStrategy::ShellStart => {
                let shell = platform::find_executable(self.program()).ok_or_else(|| {
                    ShelfError::launch_failed(
                        target,
                        format!("`{}` was not found on PATH", self.program()),
                        None,
                    )
                })?;
                let mut command = Command::new(shell);
                // The empty argument is the window title `start` expects first.
                command.args(["/c", "start", ""]).arg(target);
                Ok(command)
            }
            LaunchStrategy::NativeOpen | LaunchStrategy::DesktopOpen => {
                let mut command = Command::new(self.program());
                command.arg(target);
                Ok(command)
            }
        }
    }
}

/// Launches targets with the host platform's open mechanism.
#[derive(Debug, Clone, Copy)]
pub struct SystemLauncher {
    strategy: LaunchStrategy,
}

impl SystemLauncher {
    /// Launcher for the platform this binary runs on.
    pub fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self {
            strategy: LaunchStrategy::for_platform(platform),
        }
    }

    pub fn strategy(&self) -> LaunchStrategy {
        self.strategy
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, target: &Path) -> Result<()> {
        let result = std::fs::metadata(target)
            .map_err(|e| ShelfError::launch_failed(target, "target is not reachable", Some(e)))
            .and_then(|_| self.strategy.command(target))
            .and_then(|command| spawn_detached(command, target));

        match &result {
            Ok(()) => info!(
                target = %target.display(),
                strategy = ?self.strategy,
                "Launched shelf entry"
            ),
            Err(e) => warn!("{}", e),
        }
        result
    }
}

/// Launch `target` with the host platform's open mechanism.
pub fn launch(target: &Path) -> Result<()> {
    SystemLauncher::new().launch(target)
}

/// Start `command` with inherited stdio and return without waiting on it.
fn spawn_detached(mut command: Command, target: &Path) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = command.spawn().map_err(|e| {
        let reason = match e.kind() {
            io::ErrorKind::NotFound => format!("open mechanism `{}` is not available", program),
            io::ErrorKind::PermissionDenied => format!("permission denied starting `{}`", program),
            _ => format!("failed to start `{}`", program),
        };
        ShelfError::launch_failed(target, reason, Some(e))
    })?;

    let pid = child.id();
    debug!("Started `{}` (pid {}) for {}", program, pid, target.display());

    // Reap the child so it does not linger as a zombie.
    std::thread::spawn(move || match child.wait() {
        Ok(status) => debug!("Opener pid {} exited with {}", pid, status),
        Err(e) => debug!("Opener pid {} could not be reaped: {}", pid, e),
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn test_strategy_selection() {
        assert_eq!(
            LaunchStrategy::for_platform(Platform::Windows),
            LaunchStrategy::ShellStart
        );
        assert_eq!(
            LaunchStrategy::for_platform(Platform::MacOs),
            LaunchStrategy::NativeOpen
        );
        assert_eq!(
            LaunchStrategy::for_platform(Platform::Linux),
            LaunchStrategy::DesktopOpen
        );
        assert_eq!(
            LaunchStrategy::for_platform(Platform::OtherUnix),
            LaunchStrategy::DesktopOpen
        );
    }

    #[test]
    fn test_open_commands_pass_target_as_single_argument() {
        let target = Path::new("/opt/shelf/My Game.exe");

        let command = LaunchStrategy::DesktopOpen.command(target).unwrap();
        assert_eq!(command.get_program(), OsStr::new("xdg-open"));
        assert_eq!(command.get_args().collect::<Vec<_>>(), vec![target.as_os_str()]);

        let command = LaunchStrategy::NativeOpen.command(target).unwrap();
        assert_eq!(command.get_program(), OsStr::new("open"));
        assert_eq!(command.get_args().count(), 1);
    }

    #[cfg(windows)]
    #[test]
    fn test_shell_start_command() {
        let target = Path::new(r"C:\shelf\app1.exe");
        let command = LaunchStrategy::ShellStart.command(target).unwrap();
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("/c"),
                OsStr::new("start"),
                OsStr::new(""),
                target.as_os_str()
            ]
        );
    }

    #[test]
    fn test_launch_unreachable_target_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("deleted.exe");

        let err = SystemLauncher::new().launch(&missing).unwrap_err();
        match err {
            ShelfError::LaunchFailed { target, source, .. } => {
                assert_eq!(target, missing);
                assert_eq!(source.unwrap().kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_open_mechanism_fails() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app.exe");
        std::fs::write(&target, b"").unwrap();

        let command = Command::new("shelf-test-opener-that-does-not-exist");
        let err = spawn_detached(command, &target).unwrap_err();
        assert!(err.is_launch_failure());
        assert!(err.to_string().contains("is not available"));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_detached_returns_immediately() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("tool");
        std::fs::write(&target, b"").unwrap();

        let mut command = Command::new("sleep");
        command.arg("5");
        let started = std::time::Instant::now();
        spawn_detached(command, &target).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}
