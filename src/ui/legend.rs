use crate::render::colors::{Palette, Rgb};

/// Evenly divides `[0, width]` into one band per domain entry, no padding.
#[derive(Debug, Clone)]
pub struct BandScale {
    count: usize,
    width: f64,
}

impl BandScale {
    pub fn new(count: usize, width: f64) -> Self {
        Self { count, width }
    }

    /// Width of one band.
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.width / self.count as f64
        }
    }

    /// Left edge of the band at `index`.
    pub fn start(&self, index: usize) -> f64 {
        index as f64 * self.step()
    }

    pub fn center(&self, index: usize) -> f64 {
        self.start(index) + self.step() / 2.0
    }
}

/// A colored square above the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub category: String,
    pub color: Rgb,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// A labelled tick on the legend's bottom axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    pub x: f64,
}

/// Geometry of the legend, in coordinates local to its translated group.
#[derive(Debug, Clone)]
pub struct Legend {
    pub width: f64,
    pub height: f64,
    /// Vertical translation of the axis group inside the legend
    pub axis_offset: f64,
    pub items: Vec<LegendItem>,
    pub ticks: Vec<AxisTick>,
}

/// Horizontal inset of each legend square inside its band.
const ITEM_INSET: f64 = 10.0;
/// How far the squares reach below the axis line.
const ITEM_DROP: f64 = 22.0;

pub fn build_legend(palette: &Palette, width: f64, height: f64, axis_offset: f64) -> Legend {
    let scale = BandScale::new(palette.len(), width);
    let step = scale.step();
    let size = (step - 2.0 * ITEM_INSET).max(0.0);

    let items = palette
        .order()
        .iter()
        .enumerate()
        .map(|(i, category)| LegendItem {
            category: category.clone(),
            color: palette.color_at(i),
            x: scale.start(i) + ITEM_INSET,
            y: -step + ITEM_DROP,
            size,
        })
        .collect();

    let ticks = palette
        .order()
        .iter()
        .enumerate()
        .map(|(i, category)| AxisTick {
            label: category.clone(),
            x: scale.center(i),
        })
        .collect();

    Legend {
        width,
        height,
        axis_offset,
        items,
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_centered_in_their_bands() {
        let palette = Palette::new(vec!["Wii".into(), "DS".into(), "GB".into(), "NES".into()]);
        let legend = build_legend(&palette, 800.0, 100.0, 40.0);

        assert_eq!(legend.items.len(), 4);
        assert_eq!(legend.ticks.len(), 4);

        let second = &legend.items[1];
        assert_eq!(second.category, "DS");
        assert_eq!(second.x, 210.0);
        assert_eq!(second.size, 180.0);
        assert_eq!(second.y, -178.0);
        assert_eq!(second.color, palette.color_at(1));
        assert_eq!(legend.ticks[1].x, 300.0);
    }

    #[test]
    fn empty_palette_has_no_items() {
        let legend = build_legend(&Palette::new(Vec::new()), 800.0, 100.0, 40.0);
        assert!(legend.items.is_empty());
        assert_eq!(BandScale::new(0, 800.0).step(), 0.0);
    }
}
