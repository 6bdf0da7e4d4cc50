//! Video file discovery.
//!
//! [`scan_directory`] enumerates the files of a single directory and keeps
//! the ones whose extension matches a known video container. Recognition is
//! by extension only — no content sniffing — and the result order is stable
//! across runs so the selection prompt always shows the same numbering.

use std::path::{Path, PathBuf};

use crate::error::TailframesError;

/// File extensions recognized as video containers, matched
/// case-insensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "avi", "mkv", "flv", "wmv", "mpeg", "mpg", "m4v", "webm", "vob", "ogv", "3gp",
    "m2ts", "ts",
];

/// A video file discovered by [`scan_directory`].
///
/// Lives only for the duration of one run; the `index` is the 1-based number
/// shown next to the file in the selection prompt.
#[derive(Debug, Clone)]
pub struct VideoFile {
    /// 1-based display index, matching the prompt listing.
    pub index: usize,
    /// File name without any directory components.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Returns `true` if the path's extension matches a recognized video
/// container extension, ignoring case.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            let lowered = extension.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&lowered.as_str())
        })
        .unwrap_or(false)
}

/// Scan a directory for video files.
///
/// Lists regular files whose extension matches [`VIDEO_EXTENSIONS`], sorted
/// case-insensitively by file name, and numbers them starting at 1.
/// Directories are never listed, even when their names look like video
/// files.
///
/// # Errors
///
/// Returns [`TailframesError::NoVideosFound`] when the directory contains no
/// recognized video files, and [`TailframesError::Io`] when the directory
/// cannot be read at all.
///
/// # Example
///
/// ```no_run
/// use tailframes::scan_directory;
///
/// let files = scan_directory(&std::env::current_dir()?)?;
/// for file in &files {
///     println!("{}: {}", file.index, file.name);
/// }
/// # Ok::<(), tailframes::TailframesError>(())
/// ```
pub fn scan_directory(directory: &Path) -> Result<Vec<VideoFile>, TailframesError> {
    let mut names: Vec<(String, PathBuf)> = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        // is_file() follows symlinks, so a linked video still counts.
        if !path.is_file() || !is_video_file(&path) {
            continue;
        }
        names.push((entry.file_name().to_string_lossy().into_owned(), path));
    }

    // Case-insensitive sort with the raw name as tie-breaker, so the
    // numbering is identical from run to run.
    names.sort_by(|a, b| {
        a.0.to_lowercase()
            .cmp(&b.0.to_lowercase())
            .then_with(|| a.0.cmp(&b.0))
    });

    if names.is_empty() {
        return Err(TailframesError::NoVideosFound {
            directory: directory.to_path_buf(),
        });
    }

    log::debug!("found {} video file(s) in {}", names.len(), directory.display());

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(position, (name, path))| VideoFile {
            index: position + 1,
            name,
            path,
        })
        .collect())
}
