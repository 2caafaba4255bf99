pub mod aggregate;
pub mod arena;
pub mod load;

use self::arena::{NodeId, SalesNode, SalesTree};
use self::load::{DataSource, LoadError, RawNode};

/// A loaded, aggregated hierarchy plus its category names in input order.
#[derive(Debug)]
pub struct Dataset {
    pub tree: SalesTree,
    /// Names of the top-level groups as they appeared in the input
    pub categories: Vec<String>,
}

/// Fetch or read a source and build the dataset from it.
pub fn load_dataset(source: &DataSource) -> Result<Dataset, LoadError> {
    let text = source.read_to_string()?;
    let raw = load::parse_json(&text)?;
    build_dataset(&raw)
}

/// Build a SalesTree from parsed JSON and aggregate values. Children keep input order.
pub fn build_dataset(raw: &RawNode) -> Result<Dataset, LoadError> {
    let top = match &raw.children {
        Some(children) if !children.is_empty() => children,
        _ => return Err(LoadError::EmptyDataset),
    };

    let mut tree = SalesTree::new(&raw.name);
    let root = tree.root;
    for child in top {
        insert_node(&mut tree, root, child)?;
    }
    let categories = tree.category_names();

    aggregate::aggregate_values(&mut tree);

    tracing::info!(
        "Dataset '{}' built: {} nodes, {} categories, {} items, total value {:.2}",
        raw.name,
        tree.len(),
        categories.len(),
        tree.leaves().len(),
        tree.get(tree.root).value
    );

    Ok(Dataset { tree, categories })
}

/// Insert a raw node and its subtree. Uses an explicit stack so deep inputs
/// cannot overflow.
fn insert_node(tree: &mut SalesTree, parent: NodeId, raw: &RawNode) -> Result<(), LoadError> {
    let mut stack: Vec<(NodeId, &RawNode)> = vec![(parent, raw)];

    while let Some((parent_id, node)) = stack.pop() {
        match &node.children {
            Some(children) => {
                let id = tree.add_child(parent_id, SalesNode::group(&node.name));
                if let Some(value) = &node.value {
                    let own = value.parse(&node.name)?;
                    let entry = tree.get_mut(id);
                    entry.own_value = own;
                    entry.raw_value = Some(value.text().into());
                }
                // Reverse push so children are appended in input order.
                for child in children.iter().rev() {
                    stack.push((id, child));
                }
            }
            None => {
                let value = node.value.as_ref().ok_or_else(|| LoadError::MissingField {
                    node: node.name.clone(),
                    field: "value",
                })?;
                let category = node.category.as_deref().ok_or_else(|| LoadError::MissingField {
                    node: node.name.clone(),
                    field: "category",
                })?;
                let parsed = value.parse(&node.name)?;
                tree.add_child(
                    parent_id,
                    SalesNode::item(&node.name, category, parsed, &value.text()),
                );
            }
        }
    }

    Ok(())
}
