use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use markmerge_core::error::MarkupsFileError;
use markmerge_core::files::{load_markups, merged_file_name, save_markups};
use markmerge_core::merge::{merge_fixed_semi, MERGE_SUFFIX};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("there are 0 files selected to merge")]
    NoFiles,
    #[error("the number of fixed and semi-landmark files needs to be equal (got {fixed} fixed, {semi} semi)")]
    LengthMismatch { fixed: usize, semi: usize },
    #[error(transparent)]
    File(#[from] MarkupsFileError),
}

/// Merges each (fixed, semi) file pair and writes the result into
/// `output_dir` under the fixed file's name with the merge suffix appended.
/// Returns the written paths. Validation failures abort before any file is
/// written.
pub fn run(fixed: &[PathBuf], semi: &[PathBuf], output_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if fixed.is_empty() || semi.is_empty() {
        return Err(BatchError::NoFiles);
    }
    if fixed.len() != semi.len() {
        return Err(BatchError::LengthMismatch {
            fixed: fixed.len(),
            semi: semi.len(),
        });
    }

    let progress = ProgressBar::new(fixed.len() as u64);
    let mut written = Vec::with_capacity(fixed.len());
    for (fixed_path, semi_path) in fixed.iter().zip(semi) {
        let mut fixed_node = load_markups(fixed_path)?;
        let semi_node = load_markups(semi_path)?;
        merge_fixed_semi(&mut fixed_node, &semi_node);
        fixed_node.name.push_str(MERGE_SUFFIX);

        let output_path = output_dir.join(merged_file_name(fixed_path));
        save_markups(&fixed_node, &output_path)?;
        info!(
            path = %output_path.display(),
            points = fixed_node.len(),
            "Wrote merged landmarks"
        );
        written.push(output_path);
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(written)
}
