use std::f64::consts::PI;
use std::fmt;

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unclamped 0..255 floating channels.
    fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let c = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self { r: c(r), g: c(g), b: c(b) }
    }
}

/// `#rrggbb`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Tile color for leaves whose category is not in the palette.
pub const FALLBACK_COLOR: Rgb = Rgb::new(128, 128, 140);

/// Which cyclic interpolator a category index maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolator {
    Rainbow,
    Sinebow,
}

impl Interpolator {
    /// Even indices use the rainbow, odd indices the sinebow, so adjacent
    /// legend entries come from different hue walks.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Interpolator::Rainbow
        } else {
            Interpolator::Sinebow
        }
    }

    pub fn sample(self, t: f64) -> Rgb {
        match self {
            Interpolator::Rainbow => interpolate_rainbow(t),
            Interpolator::Sinebow => interpolate_sinebow(t),
        }
    }
}

/// Cyclic cubehelix rainbow, `t` in [0, 1] (values outside wrap).
pub fn interpolate_rainbow(t: f64) -> Rgb {
    let t = if !(0.0..=1.0).contains(&t) { t - t.floor() } else { t };
    let ts = (t - 0.5).abs();
    let h = 360.0 * t - 100.0;
    let s = 1.5 - 1.5 * ts;
    let l = 0.8 - 0.9 * ts;
    cubehelix_to_rgb(h, s, l)
}

/// Sinebow: three phase-shifted squared sines, `t` in [0, 1].
pub fn interpolate_sinebow(t: f64) -> Rgb {
    let t = 0.5 - t;
    let channel = |phase: f64| {
        let x = (PI * (t + phase)).sin();
        255.0 * x * x
    };
    Rgb::from_channels(channel(0.0), channel(1.0 / 3.0), channel(2.0 / 3.0))
}

fn cubehelix_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    const A: f64 = -0.14861;
    const B: f64 = 1.78277;
    const C: f64 = -0.29227;
    const D: f64 = -0.90649;
    const E: f64 = 1.97294;

    let h = (h + 120.0).to_radians();
    let a = s * l * (1.0 - l);
    let (sin_h, cos_h) = h.sin_cos();
    Rgb::from_channels(
        255.0 * (l + a * (A * cos_h + B * sin_h)),
        255.0 * (l + a * (C * cos_h + D * sin_h)),
        255.0 * (l + a * (E * cos_h)),
    )
}

/// Maps category names to colors through their position in a fixed order.
#[derive(Debug, Clone)]
pub struct Palette {
    order: Vec<String>,
}

impl Palette {
    /// `order` is the (usually shuffled) category order; it is never reordered.
    pub fn new(order: Vec<String>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of the first occurrence of `category`.
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.order.iter().position(|c| c == category)
    }

    /// Linear scale from `[0, n - 1]` onto `[0, 1]`. A single category sits
    /// at the middle of the range.
    pub fn scale(&self, index: usize) -> f64 {
        let span = self.order.len().saturating_sub(1);
        if span == 0 {
            0.5
        } else {
            index as f64 / span as f64
        }
    }

    /// Color for the category at `index`.
    pub fn color_at(&self, index: usize) -> Rgb {
        Interpolator::for_index(index).sample(self.scale(index))
    }

    pub fn color(&self, category: &str) -> Option<Rgb> {
        self.index_of(category).map(|i| self.color_at(i))
    }

    /// Color for a category, falling back to a neutral gray.
    pub fn color_or_fallback(&self, category: Option<&str>) -> Rgb {
        match category.and_then(|c| self.color(c)) {
            Some(color) => color,
            None => {
                tracing::warn!("No palette entry for category {:?}, using fallback", category);
                FALLBACK_COLOR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(names: &[&str]) -> Palette {
        Palette::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn known_interpolator_values() {
        assert_eq!(interpolate_rainbow(0.0), Rgb::new(110, 64, 170));
        assert_eq!(interpolate_rainbow(0.5), Rgb::new(175, 240, 91));
        assert_eq!(interpolate_sinebow(0.0), Rgb::new(255, 64, 64));
        assert_eq!(interpolate_rainbow(1.0).to_string(), "#6e40aa");
    }

    #[test]
    fn three_category_example() {
        let p = palette(&["Action", "Sports", "Shooter"]);
        assert_eq!(p.scale(0), 0.0);
        assert_eq!(p.scale(1), 0.5);
        assert_eq!(p.scale(2), 1.0);
        assert_eq!(p.color("Action"), Some(interpolate_rainbow(0.0)));
        assert_eq!(p.color("Sports"), Some(interpolate_sinebow(0.5)));
        assert_eq!(p.color("Shooter"), Some(interpolate_rainbow(1.0)));
    }

    #[test]
    fn parity_selects_interpolator() {
        for i in 0..10 {
            let expected = if i % 2 == 0 { Interpolator::Rainbow } else { Interpolator::Sinebow };
            assert_eq!(Interpolator::for_index(i), expected);
        }
        assert_ne!(Interpolator::for_index(4), Interpolator::for_index(5));
    }

    #[test]
    fn lookups_are_deterministic() {
        let p = palette(&["Wii", "DS", "X360", "PS3"]);
        assert_eq!(p.color("X360"), p.color("X360"));
        assert_eq!(p.color("Dreamcast"), None);
        assert_eq!(p.color_or_fallback(Some("Dreamcast")), FALLBACK_COLOR);
        assert_eq!(p.color_or_fallback(None), FALLBACK_COLOR);
    }

    #[test]
    fn single_category_uses_mid_scale() {
        let p = palette(&["Wii"]);
        assert_eq!(p.scale(0), 0.5);
        assert_eq!(p.color("Wii"), Some(interpolate_rainbow(0.5)));
    }

    #[test]
    fn duplicate_names_resolve_to_first_position() {
        let p = palette(&["Wii", "DS", "Wii"]);
        assert_eq!(p.index_of("Wii"), Some(0));
    }
}
