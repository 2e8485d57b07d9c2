use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::point::ControlPoint;

pub const DEFAULT_COORDINATE_SYSTEM: &str = "LPS";

/// Default selected color the host applies to freshly created nodes.
pub const DEFAULT_COLOR: [f64; 3] = [1.0, 0.5, 0.5];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    #[default]
    Fiducial,
    Curve,
}

impl MarkupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkupKind::Fiducial => "Fiducial",
            MarkupKind::Curve => "Curve",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Fiducial" => Some(MarkupKind::Fiducial),
            "Curve" => Some(MarkupKind::Curve),
            _ => None,
        }
    }
}

impl Display for MarkupKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered, named point set. Insertion order is meaningful: for curves the
/// point order is the curve's vertex order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarkupsNode {
    pub name: String,
    pub kind: MarkupKind,
    pub coordinate_system: String,
    pub color: [f64; 3],
    pub points: Vec<ControlPoint>,
}

impl MarkupsNode {
    pub fn new(kind: MarkupKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            coordinate_system: DEFAULT_COORDINATE_SYSTEM.to_string(),
            color: DEFAULT_COLOR,
            points: Vec::new(),
        }
    }

    pub fn add_point(&mut self, position: [f64; 3], label: impl Into<String>) {
        self.points.push(ControlPoint::new(position, label));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Overwrites every point's description. An empty string clears them.
    pub fn set_all_descriptions(&mut self, description: &str) {
        for point in &mut self.points {
            point.description = description.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkupKind, MarkupsNode};

    #[test]
    fn set_all_descriptions_overwrites_and_clears() {
        let mut node = MarkupsNode::new(MarkupKind::Fiducial, "lms");
        node.add_point([0., 0., 0.], "LM_1");
        node.add_point([1., 1., 1.], "LM_2");
        node.points[0].description = "ridge".to_string();

        node.set_all_descriptions("Semi");
        assert!(node.points.iter().all(|p| p.description == "Semi"));

        node.set_all_descriptions("");
        assert!(node.points.iter().all(|p| p.description.is_empty()));
    }

    #[test]
    fn kind_round_trips_through_type_name() {
        for kind in [MarkupKind::Fiducial, MarkupKind::Curve] {
            assert_eq!(MarkupKind::from_type_name(kind.as_str()), Some(kind));
        }
        assert_eq!(MarkupKind::from_type_name("Plane"), None);
    }
}
