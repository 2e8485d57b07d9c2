//! Shared types and logic for merging markups (labeled 3D point sets).

pub mod error;
pub mod fcsv;
pub mod files;
pub mod logging;
pub mod markups;
pub mod merge;
pub mod mrk;
pub mod point;
pub mod scene;
