use rayon::prelude::*;

use super::colors::{Palette, Rgb};
use super::text::{TextMeasure, TitleLine, TitleStyle};
use crate::layout::Layout;
use crate::tree::arena::{NodeId, SalesTree};
use crate::ui::legend::Legend;
use crate::ui::tooltip::{build_tooltip, TooltipInfo};

/// One leaf tile, ready to serialize.
#[derive(Debug, Clone)]
pub struct TileShape {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub fill: Rgb,
    pub lines: Vec<TitleLine>,
    pub tooltip: TooltipInfo,
}

/// Format-independent description of the whole page.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub description: String,
    pub tiles: Vec<TileShape>,
    pub legend: Legend,
}

/// Build leaf tiles from a layout: position, fill and fitted label lines.
/// Label fitting runs on the rayon pool; measurement is read-only.
pub fn build_tiles(
    tree: &SalesTree,
    layout: &Layout,
    palette: &Palette,
    style: &TitleStyle,
    measure: &dyn TextMeasure,
) -> Vec<TileShape> {
    let leaves = layout.leaves(tree);

    let labels: Vec<Vec<TitleLine>> = leaves
        .par_iter()
        .map(|tile| style.layout(&tree.get(tile.node).name, tile.w, measure))
        .collect();

    let tiles: Vec<TileShape> = leaves
        .iter()
        .zip(labels)
        .map(|(tile, lines)| {
            let node = tree.get(tile.node);
            TileShape {
                node: tile.node,
                x: tile.x,
                y: tile.y,
                w: tile.w,
                h: tile.h,
                fill: palette.color_or_fallback(node.category.as_deref()),
                lines,
                tooltip: build_tooltip(tree, tile.node),
            }
        })
        .collect();

    let wrapped = tiles.iter().filter(|t| t.lines.len() > 1).count();
    tracing::debug!("Built {} tiles ({} with wrapped labels)", tiles.len(), wrapped);

    tiles
}
