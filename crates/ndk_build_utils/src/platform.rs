//! Host platform resolution for locating NDK prebuilt tool binaries.

use thiserror::Error;

/// Host OS classes the NDK ships prebuilt toolchains for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows hosts; tools live under `windows-x86_64` and carry an `.exe` suffix.
    Windows,
    /// POSIX hosts; tools live under `linux-x86_64` with no suffix.
    Posix,
}

/// The host OS matches neither recognized platform class.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unsupported host platform: NDK prebuilt tools exist only for Windows and POSIX hosts")]
pub struct UnsupportedPlatform;

impl Platform {
    /// Classify the host this binary was compiled for.
    ///
    /// An unrecognized host is a hard configuration error rather than a
    /// fallthrough to unresolved tool paths.
    pub fn host() -> Result<Self, UnsupportedPlatform> {
        if cfg!(windows) {
            Ok(Self::Windows)
        } else if cfg!(unix) {
            Ok(Self::Posix)
        } else {
            Err(UnsupportedPlatform)
        }
    }

    /// Name of the NDK prebuilt subdirectory holding this platform's tools.
    pub fn prebuilt_dir(self) -> &'static str {
        match self {
            Self::Windows => "windows-x86_64",
            Self::Posix => "linux-x86_64",
        }
    }

    /// File name of a tool executable on this platform.
    pub fn executable_name(self, tool: &str) -> String {
        match self {
            Self::Windows => format!("{}.exe", tool),
            Self::Posix => tool.to_string(),
        }
    }
}
