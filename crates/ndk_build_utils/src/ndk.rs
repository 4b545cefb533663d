//! Android NDK installation discovery and tool path resolution.

use crate::platform::Platform;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variables consulted to locate the NDK, highest priority first.
pub const NDK_ENV_VARS: [&str; 2] = ["ANDROID_NDK_HOME", "ANDROID_NDK_ROOT"];

/// Errors raised while locating the NDK installation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NdkError {
    /// Neither NDK environment variable is set.
    #[error("ANDROID_NDK_HOME environment variable needs to be set")]
    RootNotConfigured,
}

/// Root directory of an Android NDK installation.
///
/// The path is taken from the environment as-is; nothing is validated until
/// a tool is actually spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdkRoot {
    path: PathBuf,
}

impl NdkRoot {
    /// Locate the NDK through the process environment.
    pub fn from_env() -> Result<Self, NdkError> {
        Self::resolve(|name| env::var_os(name))
    }

    /// Locate the NDK through a caller-supplied environment lookup.
    ///
    /// `ANDROID_NDK_HOME` wins over `ANDROID_NDK_ROOT` when both are set.
    pub fn resolve<F>(lookup: F) -> Result<Self, NdkError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        NDK_ENV_VARS
            .into_iter()
            .find_map(|name| lookup(name))
            .map(|value| Self {
                path: PathBuf::from(value),
            })
            .ok_or(NdkError::RootNotConfigured)
    }

    /// The NDK installation directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path to the glslc shader compiler bundled with the NDK.
    pub fn shader_compiler(&self, platform: Platform) -> PathBuf {
        self.path
            .join("shader-tools")
            .join(platform.prebuilt_dir())
            .join(platform.executable_name("glslc"))
    }

    /// Path to clang-format inside the NDK's LLVM toolchain.
    pub fn clang_format(&self, platform: Platform) -> PathBuf {
        self.path
            .join("toolchains")
            .join("llvm")
            .join("prebuilt")
            .join(platform.prebuilt_dir())
            .join("bin")
            .join(platform.executable_name("clang-format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<OsString> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| OsString::from(value))
        }
    }

    #[test]
    fn test_ndk_home_wins_over_ndk_root() {
        let root = NdkRoot::resolve(env_of(&[
            ("ANDROID_NDK_HOME", "/opt/ndk-home"),
            ("ANDROID_NDK_ROOT", "/opt/ndk-root"),
        ]))
        .unwrap();
        assert_eq!(root.path(), Path::new("/opt/ndk-home"));
    }

    #[test]
    fn test_ndk_root_is_fallback() {
        let root = NdkRoot::resolve(env_of(&[("ANDROID_NDK_ROOT", "/opt/ndk-root")])).unwrap();
        assert_eq!(root.path(), Path::new("/opt/ndk-root"));
    }

    #[test]
    fn test_unconfigured_environment_is_an_error() {
        let result = NdkRoot::resolve(env_of(&[]));
        assert_eq!(result, Err(NdkError::RootNotConfigured));
        assert!(NdkError::RootNotConfigured
            .to_string()
            .contains("ANDROID_NDK_HOME"));
    }

    #[test]
    fn test_shader_compiler_path() {
        let root = NdkRoot::resolve(env_of(&[("ANDROID_NDK_HOME", "/opt/ndk")])).unwrap();
        assert_eq!(
            root.shader_compiler(Platform::Posix),
            Path::new("/opt/ndk/shader-tools/linux-x86_64/glslc")
        );
        assert_eq!(
            root.shader_compiler(Platform::Windows),
            Path::new("/opt/ndk/shader-tools/windows-x86_64/glslc.exe")
        );
    }

    #[test]
    fn test_clang_format_path() {
        let root = NdkRoot::resolve(env_of(&[("ANDROID_NDK_HOME", "/opt/ndk")])).unwrap();
        assert_eq!(
            root.clang_format(Platform::Posix),
            Path::new("/opt/ndk/toolchains/llvm/prebuilt/linux-x86_64/bin/clang-format")
        );
    }
}
