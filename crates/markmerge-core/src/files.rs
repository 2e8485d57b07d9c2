use std::path::Path;

use crate::error::MarkupsFileError;
use crate::markups::MarkupsNode;
use crate::merge::MERGE_SUFFIX;
use crate::{fcsv, mrk};

/// Extension chains recognized as markups files, longest first.
const EXTENSION_CHAINS: [&str; 3] = [".mrk.json", ".json", ".fcsv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Tabular,
    Json,
}

fn format_for(path: &Path) -> Result<FileFormat, MarkupsFileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if extension.eq_ignore_ascii_case("fcsv") {
        Ok(FileFormat::Tabular)
    } else if extension.eq_ignore_ascii_case("json") {
        Ok(FileFormat::Json)
    } else {
        Err(MarkupsFileError::UnsupportedExtension(path.to_path_buf()))
    }
}

pub fn load_markups(path: &Path) -> Result<MarkupsNode, MarkupsFileError> {
    match format_for(path)? {
        FileFormat::Tabular => fcsv::load(path),
        FileFormat::Json => mrk::load(path),
    }
}

pub fn save_markups(node: &MarkupsNode, path: &Path) -> Result<(), MarkupsFileError> {
    match format_for(path)? {
        FileFormat::Tabular => fcsv::save(node, path),
        FileFormat::Json => mrk::save(node, path),
    }
}

/// Node name for a freshly loaded file: the file name with its recognized
/// extension chain stripped.
pub fn node_name_from_path(path: &Path) -> String {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    split_extension_chain(file_name).0.to_string()
}

/// Output file name for a merged node: the merge suffix is inserted between
/// the stem and the recognized extension chain, so `subject.mrk.json` becomes
/// `subject_merged.mrk.json`.
pub fn merged_file_name(path: &Path) -> String {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let (stem, chain) = split_extension_chain(file_name);
    format!("{}{}{}", stem, MERGE_SUFFIX, chain)
}

fn split_extension_chain(file_name: &str) -> (&str, &str) {
    let lower = file_name.to_ascii_lowercase();
    for chain in EXTENSION_CHAINS {
        if lower.ends_with(chain) && lower.len() > chain.len() {
            return file_name.split_at(file_name.len() - chain.len());
        }
    }
    (file_name, "")
}
