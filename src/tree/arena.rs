use compact_str::CompactString;

/// Index into the arena `Vec<SalesNode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node of the sales hierarchy, stored in a flat arena.
/// Uses sibling-list representation: each node has `first_child` and `next_sibling`.
#[derive(Debug, Clone)]
pub struct SalesNode {
    /// Display name (game title, platform name or dataset name)
    pub name: CompactString,
    /// Grouping attribute of a leaf (the platform). None for inner nodes.
    pub category: Option<CompactString>,
    /// The node's own value as parsed from the input (0 for inner nodes)
    pub own_value: f64,
    /// The value exactly as written in the input, used for `data-value`
    pub raw_value: Option<CompactString>,
    /// Own value plus the sum of all descendants (set by aggregation)
    pub value: f64,
    /// Parent node index (None for root)
    pub parent: Option<NodeId>,
    /// First child node index (None for leaves)
    pub first_child: Option<NodeId>,
    /// Last child, kept so appends preserve input order
    pub last_child: Option<NodeId>,
    /// Next sibling node index (None if last child)
    pub next_sibling: Option<NodeId>,
    /// Depth in the tree (root = 0)
    pub depth: u16,
}

impl SalesNode {
    /// An inner node with no value of its own.
    pub fn group(name: &str) -> Self {
        Self {
            name: CompactString::new(name),
            category: None,
            own_value: 0.0,
            raw_value: None,
            value: 0.0,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            depth: 0,
        }
    }

    /// A leaf carrying a category and a value.
    pub fn item(name: &str, category: &str, value: f64, raw_value: &str) -> Self {
        Self {
            category: Some(CompactString::new(category)),
            own_value: value,
            raw_value: Some(CompactString::new(raw_value)),
            value,
            ..Self::group(name)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    /// Value text for display: the raw input text when present.
    pub fn value_text(&self) -> String {
        match &self.raw_value {
            Some(raw) => raw.to_string(),
            None => format!("{}", self.value),
        }
    }
}

/// The sales hierarchy stored as a flat arena of nodes.
#[derive(Debug)]
pub struct SalesTree {
    /// All nodes in contiguous memory
    pub nodes: Vec<SalesNode>,
    /// Root node index
    pub root: NodeId,
}

impl SalesTree {
    /// Create a tree holding only a root group.
    pub fn new(root_name: &str) -> Self {
        SalesTree {
            nodes: vec![SalesNode::group(root_name)],
            root: NodeId(0),
        }
    }

    /// Append a child under the given parent, after any existing children.
    pub fn add_child(&mut self, parent: NodeId, mut node: SalesNode) -> NodeId {
        let new_id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.depth = self.nodes[parent.index()].depth + 1;
        node.next_sibling = None;

        match self.nodes[parent.index()].last_child {
            Some(last) => self.nodes[last.index()].next_sibling = Some(new_id),
            None => self.nodes[parent.index()].first_child = Some(new_id),
        }
        self.nodes[parent.index()].last_child = Some(new_id);

        self.nodes.push(node);
        new_id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &SalesNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> &mut SalesNode {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty (only root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            tree: self,
            current: self.nodes[parent.index()].first_child,
        }
    }

    /// All leaves in depth-first, child order.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if self.get(id).is_leaf() {
                out.push(id);
                continue;
            }
            let children: Vec<NodeId> = self.children(id).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Names of the root's direct children, in current child order.
    pub fn category_names(&self) -> Vec<String> {
        self.children(self.root)
            .map(|id| self.get(id).name.to_string())
            .collect()
    }
}

/// Iterator over the children of a node.
pub struct ChildIter<'a> {
    tree: &'a SalesTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.nodes[id.index()].next_sibling;
        Some(id)
    }
}
