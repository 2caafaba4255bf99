use crate::layout::TileRect;
use crate::tree::arena::NodeId;

/// Hit-test: find which layout rectangle contains the given point.
/// Returns the topmost (deepest) rectangle at that point.
pub fn hit_test(tiles: &[TileRect], x: f64, y: f64) -> Option<NodeId> {
    // Iterate in reverse since deeper nodes are added later
    tiles
        .iter()
        .rev()
        .find(|tile| tile.contains(x, y))
        .map(|tile| tile.node)
}
