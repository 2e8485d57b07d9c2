//! The tabular landmark format: `#`-prefixed header lines followed by one
//! CSV record per point,
//! `id,x,y,z,ow,ox,oy,oz,vis,sel,lock,label,desc,associatedNodeID`.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::MarkupsFileError;
use crate::files::node_name_from_path;
use crate::markups::{MarkupKind, MarkupsNode, DEFAULT_COORDINATE_SYSTEM};
use crate::point::ControlPoint;

const FILE_VERSION: &str = "4.11";
const COLUMNS: usize = 14;
const COLUMN_X: usize = 1;
const COLUMN_Z: usize = 3;
const COLUMN_LABEL: usize = 11;
const COLUMN_DESC: usize = 12;

pub fn load(path: &Path) -> Result<MarkupsNode, MarkupsFileError> {
    let content = fs::read_to_string(path).map_err(|source| MarkupsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &node_name_from_path(path), &content)
}

pub fn save(node: &MarkupsNode, path: &Path) -> Result<(), MarkupsFileError> {
    let write_err = |source| MarkupsFileError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_err)?;
    write!(
        file,
        "# Markups fiducial file version = {}\n# CoordinateSystem = {}\n# columns = id,x,y,z,ow,ox,oy,oz,vis,sel,lock,label,desc,associatedNodeID\n",
        FILE_VERSION, node.coordinate_system
    )
    .map_err(write_err)?;

    let mut writer = csv::Writer::from_writer(file);
    for (index, point) in node.points.iter().enumerate() {
        let record = [
            (index + 1).to_string(),
            point.position[0].to_string(),
            point.position[1].to_string(),
            point.position[2].to_string(),
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
            "1".to_string(),
            "1".to_string(),
            "1".to_string(),
            "0".to_string(),
            point.label.clone(),
            point.description.clone(),
            String::new(),
        ];
        writer
            .write_record(&record)
            .map_err(|source| MarkupsFileError::Table {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(write_err)
}

fn parse(path: &Path, name: &str, content: &str) -> Result<MarkupsNode, MarkupsFileError> {
    // The tabular format carries no kind marker; it always reloads as a
    // fiducial set.
    let mut node = MarkupsNode::new(MarkupKind::Fiducial, name);
    node.coordinate_system = header_coordinate_system(content)
        .unwrap_or(DEFAULT_COORDINATE_SYSTEM)
        .to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    for record in reader.records() {
        let record = record.map_err(|source| MarkupsFileError::Table {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() < COLUMN_DESC + 1 {
            return Err(MarkupsFileError::ShortRecord {
                path: path.to_path_buf(),
                found: record.len(),
                expected: COLUMNS,
            });
        }
        let mut position = [0.0; 3];
        for (axis, field) in (COLUMN_X..=COLUMN_Z).enumerate() {
            let value = &record[field];
            position[axis] = value
                .trim()
                .parse()
                .map_err(|_| MarkupsFileError::BadCoordinate {
                    path: path.to_path_buf(),
                    value: value.to_string(),
                })?;
        }
        node.points.push(
            ControlPoint::new(position, &record[COLUMN_LABEL])
                .with_description(&record[COLUMN_DESC]),
        );
    }
    Ok(node)
}

fn header_coordinate_system(content: &str) -> Option<&str> {
    content
        .lines()
        .take_while(|line| line.starts_with('#'))
        .find_map(|line| line.strip_prefix("# CoordinateSystem = "))
        .map(str::trim)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{parse, save};
    use crate::files::load_markups;
    use crate::markups::{MarkupKind, MarkupsNode};

    const SAMPLE: &str = "\
# Markups fiducial file version = 4.11
# CoordinateSystem = RAS
# columns = id,x,y,z,ow,ox,oy,oz,vis,sel,lock,label,desc,associatedNodeID
1,10.5,-4.25,3,0,0,0,1,1,1,0,LM_1,Fixed,
2,0,0,0,0,0,0,1,1,1,0,\"LM, jaw\",\"ridge, left\",
";

    #[test]
    fn parses_headers_records_and_quoted_fields() {
        let node = parse(Path::new("subject.fcsv"), "subject", SAMPLE).unwrap();
        assert_eq!(node.name, "subject");
        assert_eq!(node.kind, MarkupKind::Fiducial);
        assert_eq!(node.coordinate_system, "RAS");
        assert_eq!(node.len(), 2);
        assert_eq!(node.points[0].position, [10.5, -4.25, 3.0]);
        assert_eq!(node.points[0].label, "LM_1");
        assert_eq!(node.points[0].description, "Fixed");
        assert_eq!(node.points[1].label, "LM, jaw");
        assert_eq!(node.points[1].description, "ridge, left");
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let bad = "1,zero,0,0,0,0,0,1,1,1,0,LM_1,,\n";
        assert!(parse(Path::new("bad.fcsv"), "bad", bad).is_err());
    }

    #[test]
    fn rejects_truncated_records() {
        let short = "1,0,0,0\n";
        assert!(parse(Path::new("short.fcsv"), "short", short).is_err());
    }

    #[test]
    fn save_and_reload_preserve_points() {
        let mut node = MarkupsNode::new(MarkupKind::Fiducial, "skull");
        node.add_point([1.25, -2.5, 0.75], "LM_1");
        node.points[0].description = "Fixed".to_string();
        node.add_point([0.0, 4.0, -8.5], "LM, two");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skull.fcsv");
        save(&node, &path).unwrap();

        let loaded = load_markups(&path).unwrap();
        assert_eq!(loaded.name, "skull");
        assert_eq!(loaded.points, node.points);
    }
}
