use crate::layout::Layout;
use crate::tree::arena::{NodeId, SalesTree};
use crate::ui::input::hit_test;

/// Horizontal distance between the cursor and the tooltip's left edge (px).
pub const TOOLTIP_OFFSET_X: f64 = 10.0;

/// Information to display in the tooltip when hovering over a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipInfo {
    pub name: String,
    pub category: String,
    /// Value text as it appeared in the dataset
    pub value: String,
}

impl TooltipInfo {
    /// The three tooltip rows, top to bottom.
    pub fn rows(&self) -> [String; 3] {
        [
            format!("Name: {}", self.name),
            format!("Category: {}", self.category),
            format!("Value: {}", self.value),
        ]
    }
}

/// Build tooltip info for a node.
pub fn build_tooltip(tree: &SalesTree, node_id: NodeId) -> TooltipInfo {
    let node = tree.get(node_id);
    TooltipInfo {
        name: node.name.to_string(),
        category: node.category.as_deref().unwrap_or_default().to_string(),
        value: node.value_text(),
    }
}

/// Tooltip for the leaf tile under a point, if any. Points in the padding
/// between tiles hit a group and show nothing.
pub fn tooltip_at(tree: &SalesTree, layout: &Layout, x: f64, y: f64) -> Option<TooltipInfo> {
    let node = hit_test(&layout.tiles, x, y)?;
    if node == tree.root || !tree.get(node).is_leaf() {
        return None;
    }
    Some(build_tooltip(tree, node))
}
