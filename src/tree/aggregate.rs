use super::arena::SalesTree;

/// Compute aggregated values for all nodes (bottom-up).
/// After this, each node's `value` equals its own value plus the sum of its descendants.
/// Child order is left untouched; the layout tiles children in input order.
pub fn aggregate_values(tree: &mut SalesTree) {
    // Children always have higher indices than their parents in our arena,
    // so a reverse sweep visits every child before its parent.
    let len = tree.nodes.len();
    for i in (0..len).rev() {
        let mut total = tree.nodes[i].own_value;
        let mut child = tree.nodes[i].first_child;
        while let Some(child_id) = child {
            total += tree.nodes[child_id.index()].value;
            child = tree.nodes[child_id.index()].next_sibling;
        }
        tree.nodes[i].value = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::arena::SalesNode;

    #[test]
    fn sums_bottom_up_and_keeps_child_order() {
        let mut tree = SalesTree::new("sales");
        let ds = tree.add_child(tree.root, SalesNode::group("DS"));
        let wii = tree.add_child(tree.root, SalesNode::group("Wii"));
        tree.add_child(ds, SalesNode::item("Pokemon", "DS", 10.0, "10"));
        tree.add_child(wii, SalesNode::item("Wii Sports", "Wii", 82.5, "82.5"));
        tree.add_child(wii, SalesNode::item("Mario Kart", "Wii", 35.0, "35"));

        aggregate_values(&mut tree);

        assert!((tree.get(tree.root).value - 127.5).abs() < 1e-9);
        assert!((tree.get(wii).value - 117.5).abs() < 1e-9);
        assert!((tree.get(ds).value - 10.0).abs() < 1e-9);
        // The smaller group stays first.
        assert_eq!(tree.category_names(), vec!["DS", "Wii"]);
        assert_eq!(tree.get(tree.root).last_child, Some(wii));
    }
}
