//! SVG markup for tiles and the legend, plus the standalone SVG document.

use std::fmt::Write;

use super::scene::{Scene, TileShape};
use crate::ui::legend::Legend;

/// Length of axis tick marks (px).
const TICK_SIZE: f64 = 6.0;

/// Escape text for XML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // Avoid printing "-0".
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// One `<g>` per leaf tile. With `inline_titles`, each tile also carries an
/// SVG `<title>` with the tooltip rows for viewers without scripting.
pub fn tiles_markup(tiles: &[TileShape], inline_titles: bool) -> String {
    let mut out = String::new();
    for tile in tiles {
        write_tile(&mut out, tile, inline_titles);
    }
    out
}

fn write_tile(out: &mut String, tile: &TileShape, inline_titles: bool) {
    let name = escape(&tile.tooltip.name);
    let _ = write!(
        out,
        r#"<g transform="translate({x}, {y})" data-width="{w}" data-title="{name}">"#,
        x = num(tile.x),
        y = num(tile.y),
        w = num(tile.w),
    );
    if inline_titles {
        let _ = write!(out, "<title>{}</title>", escape(&tile.tooltip.rows().join("\n")));
    }
    let _ = write!(
        out,
        r#"<rect class="tile" data-name="{name}" data-category="{category}" data-value="{value}" width="{w}" height="{h}" style="fill: {fill}"></rect>"#,
        category = escape(&tile.tooltip.category),
        value = escape(&tile.tooltip.value),
        w = num(tile.w),
        h = num(tile.h),
        fill = tile.fill,
    );
    out.push_str(r#"<text class="tile-text">"#);
    for line in &tile.lines {
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            num(line.x),
            num(line.y),
            escape(&line.text)
        );
    }
    out.push_str("</text></g>\n");
}

/// The legend group: bottom axis with one tick per category, then the
/// colored squares above it.
pub fn legend_markup(legend: &Legend) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<g id="legend" transform="translate(0, {})" fill="none" font-size="10" font-family="sans-serif" text-anchor="middle">"#,
        num(legend.axis_offset)
    );
    let _ = write!(
        out,
        r#"<path class="domain" stroke="currentColor" d="M0.5,{t}V0.5H{end}V{t}"></path>"#,
        t = num(TICK_SIZE),
        end = num(legend.width + 0.5),
    );
    for tick in &legend.ticks {
        let _ = write!(
            out,
            r#"<g class="tick" opacity="1" transform="translate({x}, 0)"><line stroke="currentColor" y2="{t}"></line><text fill="currentColor" y="{ty}" dy="0.71em">{label}</text></g>"#,
            x = num(tick.x + 0.5),
            t = num(TICK_SIZE),
            ty = num(TICK_SIZE + 3.0),
            label = escape(&tick.label),
        );
    }
    for item in &legend.items {
        let _ = write!(
            out,
            r#"<rect class="legend-item" width="{s}" height="{s}" x="{x}" y="{y}" fill="{fill}"></rect>"#,
            s = num(item.size),
            x = num(item.x),
            y = num(item.y),
            fill = item.color,
        );
    }
    out.push_str("</g>\n");
    out
}

/// A single self-contained SVG: treemap on top, legend below.
pub fn render_svg(scene: &Scene) -> String {
    let total_height = scene.height + scene.legend.height;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(scene.width),
        h = num(total_height),
    );
    let _ = writeln!(out, "<title>{}</title>", escape(&scene.title));
    out.push_str("<style>.tile-text { font-size: 10px; font-family: sans-serif; pointer-events: none; }</style>\n");
    out.push_str("<g transform=\"translate(0, 0)\">\n");
    out.push_str(&tiles_markup(&scene.tiles, true));
    out.push_str("</g>\n");
    let _ = writeln!(out, r#"<g transform="translate(0, {})">"#, num(scene.height));
    out.push_str(&legend_markup(&scene.legend));
    out.push_str("</g>\n</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape(r#"Tom & Jerry <"Deluxe"> 'Ed'"#), "Tom &amp; Jerry &lt;&quot;Deluxe&quot;&gt; &#39;Ed&#39;");
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(800.0), "800");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(-0.0001), "0");
    }
}
