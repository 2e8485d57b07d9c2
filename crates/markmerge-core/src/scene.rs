use std::collections::BTreeMap;

use tracing::info;

use crate::error::SceneError;
use crate::markups::{MarkupKind, MarkupsNode};
use crate::merge::{apply_description, merge_list};

pub type NodeId = usize;

/// Name given to interactively merged nodes.
pub const MERGED_NODE_NAME: &str = "mergedMarkupsNode";
/// Display color of a freshly merged node (purple).
pub const MERGED_NODE_COLOR: [f64; 3] = [1.0, 0.0, 1.0];

/// The host annotation store, reduced to what merging needs: lookup by id,
/// creation of new named nodes, removal.
pub trait MarkupsScene {
    fn get(&self, id: NodeId) -> Option<&MarkupsNode>;
    fn get_mut(&mut self, id: NodeId) -> Option<&mut MarkupsNode>;
    fn insert(&mut self, node: MarkupsNode) -> NodeId;
    fn remove(&mut self, id: NodeId) -> Option<MarkupsNode>;
    fn ids(&self) -> Vec<NodeId>;

    fn create(&mut self, kind: MarkupKind, name: &str) -> NodeId {
        self.insert(MarkupsNode::new(kind, name))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryScene {
    next_id: NodeId,
    nodes: BTreeMap<NodeId, MarkupsNode>,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkupsScene for InMemoryScene {
    fn get(&self, id: NodeId) -> Option<&MarkupsNode> {
        self.nodes.get(&id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut MarkupsNode> {
        self.nodes.get_mut(&id)
    }

    fn insert(&mut self, node: MarkupsNode) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn remove(&mut self, id: NodeId) -> Option<MarkupsNode> {
        self.nodes.remove(&id)
    }

    fn ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }
}

/// Merges the selected curve nodes into a new purple curve node and returns
/// its id. Selection order is merge order.
pub fn merge_selected_curves(
    scene: &mut dyn MarkupsScene,
    selection: &[NodeId],
    continuous_curves: bool,
) -> Result<NodeId, SceneError> {
    merge_selected(scene, selection, MarkupKind::Curve, continuous_curves)
}

/// Merges the selected landmark sets into a new purple fiducial node and
/// returns its id.
pub fn merge_selected_fiducials(
    scene: &mut dyn MarkupsScene,
    selection: &[NodeId],
) -> Result<NodeId, SceneError> {
    merge_selected(scene, selection, MarkupKind::Fiducial, false)
}

fn merge_selected(
    scene: &mut dyn MarkupsScene,
    selection: &[NodeId],
    kind: MarkupKind,
    continuous_curves: bool,
) -> Result<NodeId, SceneError> {
    if selection.is_empty() {
        return Err(SceneError::EmptySelection);
    }
    let mut sources = Vec::with_capacity(selection.len());
    for &id in selection {
        sources.push(scene.get(id).ok_or(SceneError::NodeNotFound(id))?);
    }

    let mut merged = MarkupsNode::new(kind, MERGED_NODE_NAME);
    merged.color = MERGED_NODE_COLOR;
    merge_list(sources, &mut merged, continuous_curves);
    info!(
        sources = selection.len(),
        points = merged.len(),
        "Merged selected nodes"
    );
    Ok(scene.insert(merged))
}

/// Overwrites the point descriptions of every selected node with `label`.
pub fn apply_description_to_selected(
    scene: &mut dyn MarkupsScene,
    selection: &[NodeId],
    label: &str,
) -> Result<(), SceneError> {
    for &id in selection {
        let node = scene.get_mut(id).ok_or(SceneError::NodeNotFound(id))?;
        apply_description([node], label);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        apply_description_to_selected, merge_selected_curves, merge_selected_fiducials,
        InMemoryScene, MarkupsScene, MERGED_NODE_COLOR, MERGED_NODE_NAME,
    };
    use crate::error::SceneError;
    use crate::markups::{MarkupKind, MarkupsNode};

    fn scene_with(nodes: Vec<MarkupsNode>) -> (InMemoryScene, Vec<usize>) {
        let mut scene = InMemoryScene::new();
        let ids = nodes.into_iter().map(|n| scene.insert(n)).collect();
        (scene, ids)
    }

    fn fiducials(name: &str, points: &[[f64; 3]]) -> MarkupsNode {
        let mut node = MarkupsNode::new(MarkupKind::Fiducial, name);
        for (i, p) in points.iter().enumerate() {
            node.add_point(*p, format!("{}_{}", name, i + 1));
        }
        node
    }

    #[test]
    fn insert_get_remove_round_trip() {
        let mut scene = InMemoryScene::new();
        let id = scene.create(MarkupKind::Curve, "curve A");
        assert_eq!(scene.get(id).map(|n| n.name.as_str()), Some("curve A"));
        assert_eq!(scene.ids(), vec![id]);
        assert!(scene.remove(id).is_some());
        assert!(scene.get(id).is_none());
    }

    #[test]
    fn merging_a_selection_creates_a_purple_node() {
        let (mut scene, ids) = scene_with(vec![
            fiducials("a", &[[0., 0., 0.]]),
            fiducials("b", &[[1., 1., 1.]]),
        ]);
        let merged_id = merge_selected_fiducials(&mut scene, &ids).unwrap();
        let merged = scene.get(merged_id).unwrap();
        assert_eq!(merged.name, MERGED_NODE_NAME);
        assert_eq!(merged.color, MERGED_NODE_COLOR);
        assert_eq!(merged.kind, MarkupKind::Fiducial);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merging_curves_honors_the_continuity_option() {
        let mut a = MarkupsNode::new(MarkupKind::Curve, "a");
        a.add_point([0., 0., 0.], "c1");
        a.add_point([1., 0., 0.], "c2");
        let mut b = MarkupsNode::new(MarkupKind::Curve, "b");
        b.add_point([1., 0., 0.], "c1");
        b.add_point([2., 0., 0.], "c2");
        let (mut scene, ids) = scene_with(vec![a, b]);

        let merged_id = merge_selected_curves(&mut scene, &ids, true).unwrap();
        let merged = scene.get(merged_id).unwrap();
        assert_eq!(merged.kind, MarkupKind::Curve);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut scene = InMemoryScene::new();
        let err = merge_selected_fiducials(&mut scene, &[]).unwrap_err();
        assert!(matches!(err, SceneError::EmptySelection));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut scene = InMemoryScene::new();
        let err = merge_selected_fiducials(&mut scene, &[42]).unwrap_err();
        assert!(matches!(err, SceneError::NodeNotFound(42)));
    }

    #[test]
    fn apply_description_touches_only_the_selection() {
        let (mut scene, ids) = scene_with(vec![
            fiducials("a", &[[0., 0., 0.]]),
            fiducials("b", &[[1., 1., 1.]]),
        ]);
        apply_description_to_selected(&mut scene, &ids[..1], "Fixed").unwrap();
        assert_eq!(scene.get(ids[0]).unwrap().points[0].description, "Fixed");
        assert!(scene.get(ids[1]).unwrap().points[0].description.is_empty());
    }
}
