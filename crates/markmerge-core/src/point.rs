use serde::{Deserialize, Serialize};

/// A single markup control point: a 3D position with a label and a free-text
/// description used as a provenance/category tag (e.g. "Fixed", "Semi").
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ControlPoint {
    pub position: [f64; 3],
    pub label: String,
    pub description: String,
}

impl ControlPoint {
    pub fn new(position: [f64; 3], label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Coordinate key for duplicate detection. Duplicates are bit-identical
    /// triples only; no tolerance is applied.
    pub fn position_bits(&self) -> [u64; 3] {
        [
            self.position[0].to_bits(),
            self.position[1].to_bits(),
            self.position[2].to_bits(),
        ]
    }
}

impl From<[f64; 3]> for ControlPoint {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value, "")
    }
}
