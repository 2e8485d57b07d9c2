use std::collections::HashSet;

use tracing::debug;

use crate::markups::MarkupsNode;

/// Description applied to undescribed points from the fixed-landmark side.
pub const FIXED_DESCRIPTION: &str = "Fixed";
/// Description applied to undescribed points from the semi-landmark side.
pub const SEMI_DESCRIPTION: &str = "Semi";
/// Suffix appended to a node name after a fixed/semi merge.
pub const MERGE_SUFFIX: &str = "_merged";

/// Appends the points of `nodes`, in order, onto `merged`.
///
/// Points whose coordinate triple was already emitted are skipped. With
/// `continuous_curves` set, the first point of every node after the first is
/// skipped outright: it is assumed coincident with the previous node's
/// terminal point, so curve segments join without a doubled vertex.
pub fn merge_list<'a, I>(nodes: I, merged: &mut MarkupsNode, continuous_curves: bool)
where
    I: IntoIterator<Item = &'a MarkupsNode>,
{
    let mut seen: HashSet<[u64; 3]> = HashSet::new();
    let mut connecting = false;
    for node in nodes {
        for (index, point) in node.points.iter().enumerate() {
            if index == 0 && continuous_curves && connecting {
                continue;
            }
            if !seen.insert(point.position_bits()) {
                debug!(label = %point.label, "Skipping duplicate point");
                continue;
            }
            merged.points.push(point.clone());
        }
        connecting = true;
    }
}

/// Merges `semi` into `fixed` in place, tagging provenance through the
/// description field: empty descriptions become "Fixed" on the fixed side and
/// "Semi" on the appended semi side. Existing descriptions are kept, and no
/// deduplication happens in this variant.
pub fn merge_fixed_semi(fixed: &mut MarkupsNode, semi: &MarkupsNode) {
    for point in &mut fixed.points {
        if point.description.is_empty() {
            point.description = FIXED_DESCRIPTION.to_string();
        }
    }
    for point in &semi.points {
        let mut appended = point.clone();
        if appended.description.is_empty() {
            appended.description = SEMI_DESCRIPTION.to_string();
        }
        fixed.points.push(appended);
    }
}

/// Overwrites every point description in every target node with `label`.
pub fn apply_description<'a, I>(nodes: I, label: &str)
where
    I: IntoIterator<Item = &'a mut MarkupsNode>,
{
    for node in nodes {
        node.set_all_descriptions(label);
    }
}
