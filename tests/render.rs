use rand::rngs::StdRng;
use rand::SeedableRng;

use sales_treemap::config::RenderConfig;
use sales_treemap::render::colors::{interpolate_rainbow, interpolate_sinebow, Palette};
use sales_treemap::render::text::FixedAdvance;
use sales_treemap::render::{OutputFormat, Renderer};
use sales_treemap::tree::{build_dataset, load::parse_json, Dataset};

const SALES: &str = r#"{
  "name": "Video Game Sales Data Top 100",
  "children": [
    {"name": "Wii", "children": [
      {"name": "Wii Sports", "category": "Wii", "value": "82.53"},
      {"name": "Mario Kart Wii", "category": "Wii", "value": "35.52"},
      {"name": "Wii Sports Resort", "category": "Wii", "value": "32.77"}
    ]},
    {"name": "NES", "children": [
      {"name": "Super Mario Bros.", "category": "NES", "value": "40.24"},
      {"name": "Duck Hunt", "category": "NES", "value": "28.31"}
    ]},
    {"name": "GB", "children": [
      {"name": "Pokemon Red/Pokemon Blue", "category": "GB", "value": "31.37"},
      {"name": "Tetris", "category": "GB", "value": "30.26"}
    ]},
    {"name": "PC", "children": [
      {"name": "Tom & Jerry <Deluxe>", "category": "PC", "value": 5}
    ]}
  ]
}"#;

fn dataset() -> Dataset {
    build_dataset(&parse_json(SALES).unwrap()).unwrap()
}

fn renderer(dataset: &Dataset, seed: u64) -> Renderer {
    Renderer::new(
        RenderConfig::default(),
        Box::new(FixedAdvance::default()),
        &dataset.categories,
        &mut StdRng::seed_from_u64(seed),
    )
}

#[test]
fn html_page_has_tiles_with_data_attributes() {
    let dataset = dataset();
    let html = renderer(&dataset, 3).render(&dataset.tree, OutputFormat::Html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<h1 id="title">Video Game Sales</h1>"#));
    assert!(html.contains(r#"<h2 id="description">Top 100 Most Sold Video Games Grouped by Platform</h2>"#));
    assert!(html.contains(r#"<div id="tooltip">"#));
    assert_eq!(html.matches(r#"class="tile""#).count(), 8);
    assert!(html.contains(r#"data-name="Wii Sports" data-category="Wii" data-value="82.53""#));
    assert!(html.contains(r#"data-value="5""#));
    assert!(html.contains("Tom &amp; Jerry &lt;Deluxe&gt;"));
    assert!(!html.contains("<Deluxe>"));
}

#[test]
fn legend_has_one_item_per_category() {
    let dataset = dataset();
    let renderer = renderer(&dataset, 11);
    let html = renderer.render(&dataset.tree, OutputFormat::Html);

    assert!(html.contains(r#"<g id="legend" transform="translate(0, 40)""#));
    assert_eq!(html.matches(r#"class="legend-item""#).count(), 4);
    assert_eq!(html.matches(r#"class="tick""#).count(), 4);

    // Legend squares use the same colors as the tiles of their category.
    let palette = renderer.palette();
    for category in ["Wii", "NES", "GB", "PC"] {
        let color = palette.color(category).unwrap().to_string();
        assert!(html.contains(&format!(r#"fill="{color}""#)), "legend missing {category}");
        assert!(html.contains(&format!("fill: {color}")), "tiles missing {category}");
    }
}

#[test]
fn palette_order_is_a_permutation_fixed_by_seed() {
    let dataset = dataset();
    let a = renderer(&dataset, 42);
    let b = renderer(&dataset, 42);
    assert_eq!(a.palette().order(), b.palette().order());

    let mut order = a.palette().order().to_vec();
    order.sort();
    let mut input = dataset.categories.clone();
    input.sort();
    assert_eq!(order, input);
}

#[test]
fn three_category_example_colors_tiles() {
    let json = r#"{"name":"Genres","children":[
        {"name":"Action","children":[{"name":"A","category":"Action","value":"3"}]},
        {"name":"Sports","children":[{"name":"S","category":"Sports","value":"2"}]},
        {"name":"Shooter","children":[{"name":"H","category":"Shooter","value":"1"}]}
    ]}"#;
    let dataset = build_dataset(&parse_json(json).unwrap()).unwrap();
    let palette = Palette::new(vec!["Action".into(), "Sports".into(), "Shooter".into()]);
    let renderer = Renderer::with_palette(RenderConfig::default(), Box::new(FixedAdvance::default()), palette);
    let scene = renderer.scene(&dataset.tree);

    let fill_of = |name: &str| scene.tiles.iter().find(|t| t.tooltip.name == name).unwrap().fill;
    assert_eq!(fill_of("A"), interpolate_rainbow(0.0));
    assert_eq!(fill_of("S"), interpolate_sinebow(0.5));
    assert_eq!(fill_of("H"), interpolate_rainbow(1.0));
}

#[test]
fn labels_wrap_inside_their_tiles() {
    let dataset = dataset();
    let scene = renderer(&dataset, 5).scene(&dataset.tree);
    let measure = FixedAdvance::default();
    let style = RenderConfig::default().title_style();

    for tile in &scene.tiles {
        assert!(!tile.lines.is_empty());
        let joined: Vec<&str> = tile.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(joined.join(" "), tile.tooltip.name);
        for (i, line) in tile.lines.iter().enumerate() {
            assert_eq!(line.y, 10.0 + 10.0 * i as f64);
            let lone_word = !line.text.contains(' ');
            let width = sales_treemap::render::text::TextMeasure::width(&measure, &line.text);
            assert!(lone_word || width <= style.line_limit(tile.w));
        }
    }
}

#[test]
fn svg_output_is_standalone_with_inline_tooltips() {
    let dataset = dataset();
    let svg = renderer(&dataset, 9).render(&dataset.tree, OutputFormat::Svg);

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="750""#));
    assert!(svg.contains("<title>Name: Tetris\nCategory: GB\nValue: 30.26</title>"));
    assert_eq!(svg.matches(r#"class="legend-item""#).count(), 4);
    assert!(!svg.contains("<script>"));
}

#[test]
fn children_are_tiled_in_input_order() {
    let json = r#"{"name":"x","children":[
        {"name":"Small","children":[{"name":"s","category":"Small","value":"1"}]},
        {"name":"Big","children":[{"name":"b","category":"Big","value":"9"}]}
    ]}"#;
    let dataset = build_dataset(&parse_json(json).unwrap()).unwrap();
    let scene = renderer(&dataset, 1).scene(&dataset.tree);

    assert_eq!(scene.tiles.len(), 2);
    let first = &scene.tiles[0];
    assert_eq!(first.tooltip.name, "s");
    // Left edge of the treemap after the root and group padding.
    assert_eq!((first.x, first.y), (2.0, 2.0));
    assert!(first.w * first.h < scene.tiles[1].w * scene.tiles[1].h);
}
