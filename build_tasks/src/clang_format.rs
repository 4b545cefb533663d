//! Reformats the app's native C/C++ sources in place with the clang-format
//! binary from the Android NDK's LLVM toolchain.
//!
//! Formatting uses `-style=file`, so clang-format discovers the project's
//! `.clang-format` configuration on its own. A file that fails to format is
//! reported and skipped, and does not fail the run.

use anyhow::{Context, Result};
use ndk_build_utils::{run_all, FileFilter, Invocation, NdkRoot, Platform, ToolTask};
use std::path::PathBuf;

/// Native sources live in the Android app tree, relative to the workspace root.
const NATIVE_SOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../app/src/main/cpp");

/// Source and header suffixes clang-format is run over.
const SOURCE_SUFFIXES: &[&str] = &[".c", ".cpp", ".h", ".hpp"];

fn main() -> Result<()> {
    env_logger::init();

    let platform = Platform::host()?;
    let ndk = NdkRoot::from_env()?;

    let task = ToolTask {
        executable: ndk.clang_format(platform),
        target_dir: PathBuf::from(NATIVE_SOURCE_DIR),
        filter: FileFilter::IncludeSuffixes(SOURCE_SUFFIXES),
    };

    let sources = task
        .matching_files()
        .with_context(|| format!("could not list source directory {:?}", task.target_dir))?;

    let invocations = sources
        .into_iter()
        .map(|source| {
            Invocation::new(&task.executable)
                .arg("-i")
                .arg("-style=file")
                .arg(source)
        })
        .collect();

    let summary = run_all(invocations);
    if summary.failed() > 0 {
        log::warn!(
            "{} of {} file(s) failed to reformat",
            summary.failed(),
            summary.total()
        );
    } else {
        log::info!("reformatted {} file(s)", summary.total());
    }

    Ok(())
}
