use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use thiserror::Error;

/// Measures the rendered width of a single line of text, in pixels.
pub trait TextMeasure: Sync {
    fn width(&self, text: &str) -> f32;
}

/// Every character advances by the same amount. Deterministic, needs no font.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    pub char_width: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { char_width: 5.0 }
    }
}

impl TextMeasure for FixedAdvance {
    fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: &'static str },
    #[error("unable to load a system font from known locations")]
    NoSystemFont,
}

/// Glyph advances (plus kerning) of a real font at a fixed pixel size.
pub struct FontMeasure {
    font: Font,
    px: f32,
}

impl FontMeasure {
    pub fn new(font: Font, px: f32) -> Self {
        Self { font, px }
    }

    pub fn from_path(path: &Path, px: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            FontError::Parse {
                path: path.to_path_buf(),
                reason,
            }
        })?;
        tracing::info!("Loaded label font from {}", path.display());
        Ok(Self::new(font, px))
    }

    /// Try the usual sans-serif locations on Linux, macOS and Windows.
    pub fn load_system_font(px: f32) -> Result<Self, FontError> {
        let mut candidates: Vec<PathBuf> = Vec::new();

        if let Ok(windir) = std::env::var("WINDIR") {
            candidates.push(PathBuf::from(format!("{windir}\\Fonts\\arial.ttf")));
            candidates.push(PathBuf::from(format!("{windir}\\Fonts\\segoeui.ttf")));
        }
        candidates.push(PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"));
        candidates.push(PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"));
        candidates.push(PathBuf::from("/usr/share/fonts/dejavu/DejaVuSans.ttf"));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        ));
        candidates.push(PathBuf::from("/Library/Fonts/Arial.ttf"));
        candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"));

        for path in candidates {
            match Self::from_path(&path, px) {
                Ok(measure) => return Ok(measure),
                Err(e) => tracing::debug!("Skipping font candidate: {}", e),
            }
        }

        Err(FontError::NoSystemFont)
    }
}

impl TextMeasure for FontMeasure {
    fn width(&self, text: &str) -> f32 {
        let mut width = 0.0;
        let mut prev: Option<char> = None;
        for c in text.chars() {
            if let Some(p) = prev {
                width += self.font.horizontal_kern(p, c, self.px).unwrap_or(0.0);
            }
            width += self.font.metrics(c, self.px).advance_width;
            prev = Some(c);
        }
        width
    }
}

/// One positioned line of a tile label.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Greedy word wrap: each line takes as many leading words as fit within
/// `max_width`. Lines break only at single spaces; a lone word that is still
/// too wide is kept whole and overflows. An empty title yields one empty line.
pub fn fit_title(title: &str, max_width: f32, measure: &dyn TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: VecDeque<&str> = title.split(' ').collect();

    loop {
        let mut candidate: Vec<&str> = pending.drain(..).collect();
        while candidate.len() > 1 && measure.width(&candidate.join(" ")) > max_width {
            if let Some(word) = candidate.pop() {
                pending.push_front(word);
            }
        }
        lines.push(candidate.join(" "));

        if pending.is_empty() {
            return lines;
        }
    }
}

/// Place fitted lines top to bottom at a fixed x origin.
pub fn place_title(lines: Vec<String>, x: f64, y_start: f64, spacing: f64) -> Vec<TitleLine> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| TitleLine {
            text,
            x,
            y: y_start + i as f64 * spacing,
        })
        .collect()
}

/// How tile labels are inset and spaced.
#[derive(Debug, Clone, Copy)]
pub struct TitleStyle {
    /// Horizontal origin of every line inside the tile
    pub x: f64,
    /// Extra room kept free at the right edge
    pub margin: f64,
    /// Baseline of the first line, and the step between lines
    pub row_distance: f64,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            x: 3.0,
            margin: 10.0,
            row_distance: 10.0,
        }
    }
}

impl TitleStyle {
    /// Widest a line may measure inside a tile of the given width.
    pub fn line_limit(&self, tile_width: f64) -> f32 {
        (tile_width - self.x - self.margin) as f32
    }

    pub fn layout(&self, title: &str, tile_width: f64, measure: &dyn TextMeasure) -> Vec<TitleLine> {
        let lines = fit_title(title, self.line_limit(tile_width), measure);
        place_title(lines, self.x, self.row_distance, self.row_distance)
    }
}
