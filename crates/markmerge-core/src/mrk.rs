//! The JSON markups document: a top-level `markups` array whose entries carry
//! a type, a coordinate system, control points and optional display
//! properties. Unknown fields are tolerated on read.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MarkupsFileError;
use crate::files::node_name_from_path;
use crate::markups::{MarkupKind, MarkupsNode, DEFAULT_COORDINATE_SYSTEM};
use crate::point::ControlPoint;

const SCHEMA: &str =
    "https://raw.githubusercontent.com/slicer/slicer/master/Modules/Loadable/Markups/Resources/Schema/markups-schema-v1.0.3.json#";

#[derive(Serialize, Deserialize)]
struct MarkupsDocument {
    #[serde(rename = "@schema")]
    schema: String,
    #[serde(default)]
    markups: Vec<MarkupEntry>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkupEntry {
    #[serde(rename = "type")]
    markup_type: String,
    #[serde(default = "default_coordinate_system")]
    coordinate_system: String,
    #[serde(default)]
    control_points: Vec<JsonControlPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display: Option<DisplayProperties>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonControlPoint {
    #[serde(default)]
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    description: String,
    position: [f64; 3],
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct DisplayProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_color: Option<[f64; 3]>,
}

fn default_coordinate_system() -> String {
    DEFAULT_COORDINATE_SYSTEM.to_string()
}

impl From<&JsonControlPoint> for ControlPoint {
    fn from(value: &JsonControlPoint) -> Self {
        ControlPoint::new(value.position, &value.label).with_description(&value.description)
    }
}

pub fn load(path: &Path) -> Result<MarkupsNode, MarkupsFileError> {
    let content = fs::read_to_string(path).map_err(|source| MarkupsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &node_name_from_path(path), &content)
}

pub fn save(node: &MarkupsNode, path: &Path) -> Result<(), MarkupsFileError> {
    let document = render(node);
    let file = File::create(path).map_err(|source| MarkupsFileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &document).map_err(|source| {
        MarkupsFileError::Document {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn parse(path: &Path, name: &str, content: &str) -> Result<MarkupsNode, MarkupsFileError> {
    let document: MarkupsDocument =
        serde_json::from_str(content).map_err(|source| MarkupsFileError::Document {
            path: path.to_path_buf(),
            source,
        })?;
    // A document can hold several markups; the loader takes the first, as the
    // host does when loading a single node.
    let entry = document
        .markups
        .into_iter()
        .next()
        .ok_or_else(|| MarkupsFileError::EmptyDocument {
            path: path.to_path_buf(),
        })?;
    let kind = MarkupKind::from_type_name(&entry.markup_type).ok_or_else(|| {
        MarkupsFileError::UnsupportedMarkupType {
            kind: entry.markup_type.clone(),
            path: path.to_path_buf(),
        }
    })?;

    let mut node = MarkupsNode::new(kind, name);
    node.coordinate_system = entry.coordinate_system;
    if let Some(color) = entry.display.and_then(|d| d.selected_color) {
        node.color = color;
    }
    node.points = entry.control_points.iter().map(ControlPoint::from).collect();
    Ok(node)
}

fn render(node: &MarkupsNode) -> MarkupsDocument {
    MarkupsDocument {
        schema: SCHEMA.to_string(),
        markups: vec![MarkupEntry {
            markup_type: node.kind.as_str().to_string(),
            coordinate_system: node.coordinate_system.clone(),
            control_points: node
                .points
                .iter()
                .enumerate()
                .map(|(index, point)| JsonControlPoint {
                    id: (index + 1).to_string(),
                    label: point.label.clone(),
                    description: point.description.clone(),
                    position: point.position,
                })
                .collect(),
            display: Some(DisplayProperties {
                selected_color: Some(node.color),
            }),
        }],
    }
}
