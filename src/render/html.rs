//! Self-contained HTML page with embedded CSS and the hover script.

use super::scene::Scene;
use super::svg::{escape, legend_markup, num, tiles_markup};
use crate::ui::tooltip::TOOLTIP_OFFSET_X;

/// Render the scene as a standalone HTML page.
pub fn render_html(scene: &Scene) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<div id="container">
<div id="tooltip"><p>row1</p><p>row2</p><p>row3</p></div>
<h1 id="title">{title}</h1>
<h2 id="description">{description}</h2>
<svg width="{width}" height="{height}">
<g transform="translate(0, 0)">
{tiles}</g>
</svg>
<svg width="{width}" height="{legend_height}">
{legend}</svg>
</div>
<script>{js}</script>
</body>
</html>
"#,
        title = escape(&scene.title),
        description = escape(&scene.description),
        width = num(scene.width),
        height = num(scene.height),
        legend_height = num(scene.legend.height),
        tiles = tiles_markup(&scene.tiles, false),
        legend = legend_markup(&scene.legend),
        css = inline_css(),
        js = inline_javascript(),
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: sans-serif; margin: 0; background: #f4f4f4; }
#container { position: relative; width: fit-content; margin: 0 auto; padding: 16px; }
#title, #description { text-align: center; margin: 8px 0; }
.tile-text { font-size: 10px; pointer-events: none; }
#tooltip { position: absolute; display: none; padding: 6px 10px; background: rgba(255, 255, 204, 0.95); border: 1px solid #999; border-radius: 4px; font-size: 12px; pointer-events: none; }
#tooltip.visible { display: block; }
#tooltip p { margin: 2px 0; }
"#
}

fn inline_javascript() -> String {
    format!(
        r#"
(function () {{
    var container = document.getElementById('container');
    var tooltip = document.getElementById('tooltip');
    var rows = tooltip.getElementsByTagName('p');
    document.querySelectorAll('.tile').forEach(function (tile) {{
        tile.addEventListener('mousemove', function (event) {{
            var value = tile.getAttribute('data-value');
            rows[0].textContent = 'Name: ' + tile.getAttribute('data-name');
            rows[1].textContent = 'Category: ' + tile.getAttribute('data-category');
            rows[2].textContent = 'Value: ' + value;
            tooltip.setAttribute('class', 'visible');
            tooltip.setAttribute('data-value', value);
            var bounds = container.getBoundingClientRect();
            var x = event.clientX - bounds.left;
            var y = event.clientY - bounds.top;
            tooltip.style.left = (x + {offset}) + 'px';
            tooltip.style.top = (y - tooltip.getBoundingClientRect().height / 2) + 'px';
        }});
        tile.addEventListener('mouseleave', function () {{
            tooltip.setAttribute('class', '');
        }});
    }});
}})();
"#,
        offset = num(TOOLTIP_OFFSET_X)
    )
}
