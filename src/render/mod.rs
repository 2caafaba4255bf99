pub mod colors;
pub mod html;
pub mod scene;
pub mod shuffle;
pub mod svg;
pub mod text;

use std::path::Path;

use rand::Rng;

use crate::config::RenderConfig;
use crate::layout::compute_layout;
use crate::tree::arena::SalesTree;
use crate::ui::legend::build_legend;
use colors::Palette;
use scene::{build_tiles, Scene};
use text::{FixedAdvance, FontMeasure, TextMeasure};

/// Output document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML page with tooltip script
    Html,
    /// Standalone SVG, tooltips as `<title>` elements
    Svg,
}

/// Holds everything one render needs: config, text measurement and the
/// category palette. Built once per run.
pub struct Renderer {
    config: RenderConfig,
    measure: Box<dyn TextMeasure>,
    palette: Palette,
}

impl Renderer {
    /// Shuffle `categories` with `rng` to fix the palette order for this run.
    pub fn new<R: Rng + ?Sized>(
        config: RenderConfig,
        measure: Box<dyn TextMeasure>,
        categories: &[String],
        rng: &mut R,
    ) -> Self {
        let order = shuffle::shuffle(categories, rng);
        tracing::info!("Category order: {}", order.join(", "));
        Self::with_palette(config, measure, Palette::new(order))
    }

    pub fn with_palette(config: RenderConfig, measure: Box<dyn TextMeasure>, palette: Palette) -> Self {
        Self {
            config,
            measure,
            palette,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Lay out the tree and assemble tiles, labels and legend.
    pub fn scene(&self, tree: &SalesTree) -> Scene {
        let config = &self.config;
        let layout = compute_layout(tree, config.width, config.height, &config.layout_config());
        let tiles = build_tiles(
            tree,
            &layout,
            &self.palette,
            &config.title_style(),
            self.measure.as_ref(),
        );
        let legend = build_legend(
            &self.palette,
            config.width,
            config.legend_height,
            config.legend_axis_offset,
        );

        tracing::info!(
            "Scene ready: {} tiles, {} legend entries",
            tiles.len(),
            legend.items.len()
        );

        Scene {
            width: config.width,
            height: config.height,
            title: config.title.clone(),
            description: config.description.clone(),
            tiles,
            legend,
        }
    }

    pub fn render(&self, tree: &SalesTree, format: OutputFormat) -> String {
        let scene = self.scene(tree);
        match format {
            OutputFormat::Html => html::render_html(&scene),
            OutputFormat::Svg => svg::render_svg(&scene),
        }
    }
}

/// Pick the label measurement: an explicit font, else a system font, else a
/// fixed per-character advance.
pub fn select_measure(config: &RenderConfig, font: Option<&Path>) -> Box<dyn TextMeasure> {
    if let Some(path) = font {
        match FontMeasure::from_path(path, config.font_size) {
            Ok(measure) => return Box::new(measure),
            Err(e) => tracing::warn!("{}, trying system fonts", e),
        }
    }
    match FontMeasure::load_system_font(config.font_size) {
        Ok(measure) => Box::new(measure),
        Err(e) => {
            tracing::warn!("{}, using fixed {}px character advance", e, config.char_width);
            Box::new(FixedAdvance {
                char_width: config.char_width,
            })
        }
    }
}
