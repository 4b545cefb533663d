//! # NDK Build Utilities
//!
//! Shared runner for the project's build-automation binaries: locate a tool
//! inside an Android NDK installation, enumerate a directory of target files,
//! and shell out to the tool once per file.
//!
//! The two consumers (`build_shaders` and `clang_format` in the `build_tasks`
//! crate) differ only in which tool they resolve, which directory they walk,
//! and how each per-file command line is shaped:
//!
//! ```rust,no_run
//! use ndk_build_utils::{run_all, FileFilter, Invocation, NdkRoot, Platform, ToolTask};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let platform = Platform::host()?;
//!     let ndk = NdkRoot::from_env()?;
//!
//!     let task = ToolTask {
//!         executable: ndk.shader_compiler(platform),
//!         target_dir: "shaders".into(),
//!         filter: FileFilter::ExcludeSuffix(".spv"),
//!     };
//!
//!     let invocations = task
//!         .matching_files()?
//!         .into_iter()
//!         .map(|file| Invocation::new(&task.executable).arg(file))
//!         .collect();
//!
//!     run_all(invocations);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod invoke;
pub mod ndk;
pub mod platform;
pub mod task;

pub use invoke::{run_all, Invocation, InvocationOutcome, RunSummary};
pub use ndk::{NdkError, NdkRoot};
pub use platform::{Platform, UnsupportedPlatform};
pub use task::{FileFilter, ToolTask};
