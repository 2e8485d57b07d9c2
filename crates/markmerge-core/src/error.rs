use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scene::NodeId;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("there are 0 nodes selected to merge")]
    EmptySelection,
    #[error("no markups node with id {0}")]
    NodeNotFound(NodeId),
}

#[derive(Debug, Error)]
pub enum MarkupsFileError {
    #[error("unsupported markups file extension: {0:?}")]
    UnsupportedExtension(PathBuf),
    #[error("failed reading {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed writing {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed landmark table in {path:?}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("bad coordinate {value:?} in {path:?}")]
    BadCoordinate { path: PathBuf, value: String },
    #[error("landmark record with {found} columns (expected {expected}) in {path:?}")]
    ShortRecord {
        path: PathBuf,
        found: usize,
        expected: usize,
    },
    #[error("malformed markups document in {path:?}")]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no markups in document {path:?}")]
    EmptyDocument { path: PathBuf },
    #[error("unsupported markup type {kind:?} in {path:?}")]
    UnsupportedMarkupType { kind: String, path: PathBuf },
}
