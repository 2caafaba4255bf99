use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::layout::{LayoutConfig, GOLDEN_RATIO};
use crate::render::text::TitleStyle;

/// Everything that shapes the rendered page. Any field may be omitted from a
/// TOML file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Treemap width (px); the legend shares it
    pub width: f64,
    /// Treemap height (px)
    pub height: f64,
    /// Gap between sibling tiles (px)
    pub tile_padding: f64,
    /// Gap between a group's edge and its tiles (px)
    pub outer_padding: f64,
    /// Baseline of the first label line and step between lines (px)
    pub title_row_distance: f64,
    /// Label x origin inside a tile (px)
    pub title_x: f64,
    /// Space kept free right of a label line (px)
    pub title_margin: f64,
    /// Label font size (px)
    pub font_size: f32,
    /// Per-character advance when no font is loaded (px)
    pub char_width: f32,
    pub legend_height: f64,
    /// Vertical offset of the legend axis (px)
    pub legend_axis_offset: f64,
    pub title: String,
    pub description: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 650.0,
            tile_padding: 3.0,
            outer_padding: 1.0,
            title_row_distance: 10.0,
            title_x: 3.0,
            title_margin: 10.0,
            font_size: 10.0,
            char_width: 5.0,
            legend_height: 100.0,
            legend_axis_offset: 40.0,
            title: "Video Game Sales".to_string(),
            description: "Top 100 Most Sold Video Games Grouped by Platform".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid render config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("in config file {}", path.display()))?;
        tracing::info!("Loaded render config from {}", path.display());
        Ok(config)
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            padding_inner: self.tile_padding,
            padding_outer: self.outer_padding,
            ratio: GOLDEN_RATIO,
            ..LayoutConfig::default()
        }
    }

    pub fn title_style(&self) -> TitleStyle {
        TitleStyle {
            x: self.title_x,
            margin: self.title_margin,
            row_distance: self.title_row_distance,
        }
    }
}
