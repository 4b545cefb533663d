//! Compiles every shader source in the app's shader-assets directory to
//! SPIR-V with the glslc compiler bundled in the Android NDK.
//!
//! Every file not already carrying the `.spv` suffix is recompiled on every
//! run; there is no up-to-date check. A shader that fails to compile is
//! reported and skipped, and does not fail the run.

use anyhow::{Context, Result};
use ndk_build_utils::{run_all, FileFilter, Invocation, NdkRoot, Platform, ToolTask};
use std::path::PathBuf;

/// Shader sources live in the Android app tree, relative to the workspace root.
const SHADER_ASSETS_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../app/src/main/assets/shaders");

/// Suffix of compiled shader modules, appended to each source file name.
const COMPILED_SUFFIX: &str = ".spv";

fn main() -> Result<()> {
    env_logger::init();

    let platform = Platform::host()?;
    let ndk = NdkRoot::from_env()?;

    let task = ToolTask {
        executable: ndk.shader_compiler(platform),
        target_dir: PathBuf::from(SHADER_ASSETS_DIR),
        filter: FileFilter::ExcludeSuffix(COMPILED_SUFFIX),
    };

    let shaders = task
        .matching_files()
        .with_context(|| format!("could not list shader directory {:?}", task.target_dir))?;

    let invocations = shaders
        .into_iter()
        .map(|shader| {
            let mut output = shader.clone().into_os_string();
            output.push(COMPILED_SUFFIX);
            Invocation::new(&task.executable)
                .arg(shader)
                .arg("-o")
                .arg(output)
        })
        .collect();

    let summary = run_all(invocations);
    if summary.failed() > 0 {
        log::warn!(
            "{} of {} shader(s) failed to compile",
            summary.failed(),
            summary.total()
        );
    } else {
        log::info!("compiled {} shader(s)", summary.total());
    }

    Ok(())
}
