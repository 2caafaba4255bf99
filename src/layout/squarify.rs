use crate::tree::arena::{NodeId, SalesTree};
use std::collections::HashMap;

/// Target aspect ratio for squarified rows.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// A positioned rectangle in the treemap layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub depth: u16,
}

impl TileRect {
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// The full layout result (rects + fast lookup).
#[derive(Debug)]
pub struct Layout {
    /// Every node's rectangle, parents before their children
    pub tiles: Vec<TileRect>,
    /// node → index into `tiles`
    pub node_to_tile: HashMap<NodeId, usize>,
}

impl Layout {
    pub fn tile(&self, node: NodeId) -> Option<&TileRect> {
        self.node_to_tile.get(&node).map(|&i| &self.tiles[i])
    }

    /// Rectangles of leaf nodes in depth-first child order.
    pub fn leaves<'a>(&'a self, tree: &SalesTree) -> Vec<&'a TileRect> {
        tree.leaves()
            .into_iter()
            .filter_map(|id| self.tile(id))
            .collect()
    }
}

/// Configuration for treemap layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Gap between sibling rectangles (px)
    pub padding_inner: f64,
    /// Gap between a parent's edge and its children (px)
    pub padding_outer: f64,
    /// Target aspect ratio for squarified rows
    pub ratio: f64,
    /// Maximum recursion depth
    pub max_depth: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_inner: 3.0,
            padding_outer: 1.0,
            ratio: GOLDEN_RATIO,
            max_depth: 64,
        }
    }
}

/// Lay out the whole tree inside a `width` × `height` viewport.
pub fn compute_layout(tree: &SalesTree, width: f64, height: f64, config: &LayoutConfig) -> Layout {
    let mut tiles = Vec::with_capacity(tree.len());
    let mut node_to_tile = HashMap::with_capacity(tree.len());

    let bounds = Positioned {
        x0: 0.0,
        y0: 0.0,
        x1: width.max(0.0),
        y1: height.max(0.0),
    };
    position_node(tree, tree.root, bounds, 0.0, config, &mut tiles, &mut node_to_tile);

    tracing::debug!(
        "Layout computed: {} rectangles in {:.0}x{:.0}",
        tiles.len(),
        width,
        height
    );

    Layout { tiles, node_to_tile }
}

/// Shrink the node's box by the padding its parent handed down, record it,
/// then tile its children inside the outer padding.
fn position_node(
    tree: &SalesTree,
    node: NodeId,
    bounds: Positioned,
    pad: f64,
    config: &LayoutConfig,
    tiles: &mut Vec<TileRect>,
    node_to_tile: &mut HashMap<NodeId, usize>,
) {
    let own = bounds.inset(pad);
    let depth = tree.get(node).depth;

    node_to_tile.insert(node, tiles.len());
    tiles.push(TileRect {
        node,
        x: own.x0,
        y: own.y0,
        w: own.x1 - own.x0,
        h: own.y1 - own.y0,
        depth,
    });

    if depth >= config.max_depth {
        return;
    }

    let children: Vec<NodeId> = tree.children(node).collect();
    if children.is_empty() {
        return;
    }

    // Children are inset by half the inner padding each, so the area handed to
    // the tiler is widened by that amount to keep the outer gap exact.
    let child_pad = config.padding_inner / 2.0;
    let area = own.inset(config.padding_outer - child_pad);

    let values: Vec<f64> = children.iter().map(|&id| tree.get(id).value).collect();
    let positioned = squarify(&values, area, config.ratio);

    for (&child, pos) in children.iter().zip(positioned) {
        position_node(tree, child, pos, child_pad, config, tiles, node_to_tile);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Positioned {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Positioned {
    /// Move every edge inward by `p`; an inverted box collapses to its midline.
    fn inset(self, p: f64) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (self.x0 + p, self.y0 + p, self.x1 - p, self.y1 - p);
        if x1 < x0 {
            x0 = (x0 + x1) / 2.0;
            x1 = x0;
        }
        if y1 < y0 {
            y0 = (y0 + y1) / 2.0;
            y1 = y0;
        }
        Positioned { x0, y0, x1, y1 }
    }
}

/// Squarified tiling of `values` (in the given order) into `area`.
/// Rows grow greedily while the worst aspect ratio keeps improving.
/// The result is index-aligned with `values`.
fn squarify(values: &[f64], area: Positioned, ratio: f64) -> Vec<Positioned> {
    let n = values.len();
    let mut result = vec![Positioned::default(); n];
    let mut remaining: f64 = values.iter().sum();
    let Positioned { mut x0, mut y0, x1, y1 } = area;

    let mut i0 = 0;
    let mut i1 = 0;
    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Guard against degenerate cases: the rest collapse onto the corner.
        if dx <= 0.0 || dy <= 0.0 || remaining <= 0.0 {
            for slot in &mut result[i0..] {
                *slot = Positioned { x0, y0, x1: x0, y1: y0 };
            }
            break;
        }

        // Find the first non-zero value to seed the row.
        let mut sum;
        loop {
            sum = values[i1];
            i1 += 1;
            if sum != 0.0 || i1 >= n {
                break;
            }
        }
        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = (dy / dx).max(dx / dy) / (remaining * ratio);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = worst_aspect_ratio(min_value, max_value, beta);

        while i1 < n {
            let value = values[i1];
            sum += value;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            beta = sum * sum * alpha;
            let new_ratio = worst_aspect_ratio(min_value, max_value, beta);
            if new_ratio > min_ratio {
                sum -= value;
                break;
            }
            min_ratio = new_ratio;
            i1 += 1;
        }

        let row = &values[i0..i1];
        let out = &mut result[i0..i1];
        if dx < dy {
            // Horizontal strip across the full width, consuming height.
            let y_end = y0 + dy * sum / remaining;
            dice(row, sum, out, x0, y0, x1, y_end);
            y0 = y_end;
        } else {
            // Vertical strip across the full height, consuming width.
            let x_end = x0 + dx * sum / remaining;
            slice(row, sum, out, x0, y0, x_end, y1);
            x0 = x_end;
        }

        remaining -= sum;
        i0 = i1;
    }

    result
}

fn worst_aspect_ratio(min_value: f64, max_value: f64, beta: f64) -> f64 {
    (max_value / beta).max(beta / min_value)
}

/// Lay a row out left to right.
fn dice(row: &[f64], sum: f64, out: &mut [Positioned], x0: f64, y0: f64, x1: f64, y1: f64) {
    let k = if sum > 0.0 { (x1 - x0) / sum } else { 0.0 };
    let mut x = x0;
    for (&value, slot) in row.iter().zip(out.iter_mut()) {
        let next = x + value * k;
        *slot = Positioned { x0: x, y0, x1: next, y1 };
        x = next;
    }
}

/// Lay a row out top to bottom.
fn slice(row: &[f64], sum: f64, out: &mut [Positioned], x0: f64, y0: f64, x1: f64, y1: f64) {
    let k = if sum > 0.0 { (y1 - y0) / sum } else { 0.0 };
    let mut y = y0;
    for (&value, slot) in row.iter().zip(out.iter_mut()) {
        let next = y + value * k;
        *slot = Positioned { x0, y0: y, x1, y1: next };
        y = next;
    }
}
