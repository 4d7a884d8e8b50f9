//! Frame-sequence discovery.
//!
//! Render outputs arrive as numbered frame files. Given any one frame,
//! [`detect_frame_sequence`] finds every sibling that shares the same
//! non-numeric prefix and extension, so hooks can validate and publish a
//! whole sequence from a single representative path.

use std::path::{Path, PathBuf};

use crate::error::FileOpsError;

/// Returns all sibling frames of `frame_path`, sorted.
///
/// The stem is split into a prefix and a trailing digit run; siblings
/// are the directory entries with the same prefix and extension whose
/// remainder is all digits. A path whose stem has no trailing digits is
/// not part of a sequence and yields an error.
pub fn detect_frame_sequence(frame_path: &Path) -> Result<Vec<PathBuf>, FileOpsError> {
    let dir = frame_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = frame_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem.to_owned(), format!(".{ext}")),
        None => (file_name, String::new()),
    };
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    if prefix.len() == stem.len() {
        return Err(FileOpsError::NotASequence(frame_path.to_owned()));
    }
    let prefix = prefix.to_owned();

    let mut frames = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(middle) = name
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_suffix(ext.as_str()))
        else {
            continue;
        };
        if !middle.is_empty() && middle.bytes().all(|b| b.is_ascii_digit()) {
            frames.push(entry.path());
        }
    }
    frames.sort();
    Ok(frames)
}

/// Extracts the frame number from a sequence file path.
pub fn frame_number(frame_path: &Path) -> Option<i64> {
    let file_name = frame_path.file_name()?.to_string_lossy().into_owned();
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) => stem.to_owned(),
        None => file_name,
    };
    let digits: String = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}

/// Frame numbers missing from a detected sequence.
///
/// Gaps are reported between the lowest and highest frame present.
pub fn missing_frames(frames: &[PathBuf]) -> Vec<i64> {
    let mut numbers: Vec<i64> = frames.iter().filter_map(|p| frame_number(p)).collect();
    numbers.sort_unstable();
    numbers.dedup();
    let (Some(&first), Some(&last)) = (numbers.first(), numbers.last()) else {
        return Vec::new();
    };
    (first..=last).filter(|n| !numbers.contains(n)).collect()
}
