//! Run configuration and target-file enumeration for a toolchain tool.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Rule selecting which files in the target directory the tool runs over.
///
/// Matching is plain string-suffix comparison on the file name, not
/// extension parsing, so `ExcludeSuffix(".spv")` also rejects a file named
/// exactly `.spv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFilter {
    /// Keep every file except those whose name ends with the suffix.
    ExcludeSuffix(&'static str),
    /// Keep only files whose name ends with one of the suffixes.
    IncludeSuffixes(&'static [&'static str]),
}

impl FileFilter {
    /// Whether a file with this name should be processed.
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Self::ExcludeSuffix(suffix) => !file_name.ends_with(suffix),
            Self::IncludeSuffixes(suffixes) => {
                suffixes.iter().any(|suffix| file_name.ends_with(suffix))
            }
        }
    }
}

/// One tool run over one directory, resolved once at startup.
///
/// Bundles everything the run needs so the enumeration and invocation logic
/// never reach back into the process environment.
#[derive(Debug, Clone)]
pub struct ToolTask {
    /// Resolved tool executable. Not checked for existence; a missing tool
    /// surfaces as a spawn failure on the first invocation.
    pub executable: PathBuf,
    /// Directory whose files the tool is run over.
    pub target_dir: PathBuf,
    /// Which files in the directory to process.
    pub filter: FileFilter,
}

impl ToolTask {
    /// List the files in the target directory that pass the filter.
    ///
    /// Non-recursive; subdirectories are skipped entirely. The result is
    /// sorted so runs do not depend on filesystem listing order. Every
    /// matching file is returned on every call; there is no up-to-date
    /// tracking between runs.
    pub fn matching_files(&self) -> io::Result<Vec<PathBuf>> {
        matching_files(&self.target_dir, &self.filter)
    }
}

/// Standalone form of [`ToolTask::matching_files`].
pub fn matching_files(dir: &Path, filter: &FileFilter) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if filter.matches(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
