mod squarify;

pub use squarify::{compute_layout, Layout, LayoutConfig, TileRect, GOLDEN_RATIO};
