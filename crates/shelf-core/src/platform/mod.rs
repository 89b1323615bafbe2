//! Platform abstraction layer for cross-platform compatibility.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module rather
//! than scattered throughout the codebase. Callers ask for a [`Platform`]
//! value and query its capabilities.
//!
//! # Submodules
//!
//! - `paths` - Executable lookup on the search path

pub mod paths;

pub use paths::{find_executable, find_executable_in};

/// Host platform identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    /// BSDs and other POSIX-like systems.
    OtherUnix,
    Unknown,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "macos")]
        {
            Platform::MacOs
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(all(unix, not(any(target_os = "macos", target_os = "linux"))))]
        {
            Platform::OtherUnix
        }
        #[cfg(not(any(unix, windows)))]
        {
            Platform::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::OtherUnix => "unix",
            Platform::Unknown => "unknown",
        }
    }

    /// Whether the platform ships an `open <path>` command.
    pub fn has_native_open_command(&self) -> bool {
        matches!(self, Platform::MacOs)
    }

    /// Whether paths are opened through the command shell's `start` verb
    /// rather than a standalone open command.
    pub fn opens_via_shell(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform() {
        let platform = Platform::current();
        assert!(["windows", "macos", "linux", "unix", "unknown"].contains(&platform.as_str()));

        #[cfg(target_os = "linux")]
        assert_eq!(platform, Platform::Linux);
    }

    #[test]
    fn test_capabilities_are_exclusive() {
        for platform in [
            Platform::Windows,
            Platform::MacOs,
            Platform::Linux,
            Platform::OtherUnix,
            Platform::Unknown,
        ] {
            assert!(!(platform.has_native_open_command() && platform.opens_via_shell()));
        }
        assert!(Platform::Windows.opens_via_shell());
        assert!(Platform::MacOs.has_native_open_command());
    }
}
