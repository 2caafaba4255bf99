/// Diagnostic tool to verify dataset → layout → palette pipeline
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sales_treemap::config::RenderConfig;
use sales_treemap::layout::compute_layout;
use sales_treemap::render::colors::Palette;
use sales_treemap::render::shuffle::shuffle;
use sales_treemap::tree::{self, load::DataSource, load::DEFAULT_DATA_URL};
use sales_treemap::ui::tooltip::tooltip_at;

#[derive(Debug, Parser)]
#[command(name = "debug-layout", about = "Print tree, layout and palette diagnostics")]
struct Args {
    /// Dataset URL or local JSON file
    #[arg(default_value = DEFAULT_DATA_URL)]
    source: String,

    /// Seed for the category order
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Report the tooltip under a point, as `x,y`
    #[arg(long)]
    point: Option<String>,
}

fn parse_point(s: &str) -> anyhow::Result<(f64, f64)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("expected x,y but got '{}'", s))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sales_treemap=debug".parse()?),
        )
        .init();

    let args = Args::parse();
    let source = DataSource::parse(&args.source);

    println!("=== DIAGNOSTIC: Dataset → Layout Pipeline ===");
    println!("Source: {}", source);

    let dataset = tree::load_dataset(&source)?;
    let tree = &dataset.tree;
    let root = tree.get(tree.root);
    println!("\n[1] Tree built: {} nodes", tree.len());
    println!("    Root: '{}' (value={:.2})", root.name, root.value);

    println!("\n[2] Categories in input order:");
    for (i, id) in tree.children(tree.root).enumerate() {
        let node = tree.get(id);
        println!(
            "    [{}] '{}' - {:.2} ({} items)",
            i,
            node.name,
            node.value,
            tree.children(id).count()
        );
    }

    let config = RenderConfig::default();
    let layout = compute_layout(tree, config.width, config.height, &config.layout_config());
    let leaves = layout.leaves(tree);
    println!("\n[3] Layout computed: {} rectangles, {} leaves", layout.tiles.len(), leaves.len());
    let max_depth = layout.tiles.iter().map(|t| t.depth).max().unwrap_or(0);
    for depth in 0..=max_depth {
        let count = layout.tiles.iter().filter(|t| t.depth == depth).count();
        println!("    Depth {}: {} rectangles", depth, count);
    }

    println!("\n[4] Top 10 largest tiles by area:");
    let mut sorted = leaves.clone();
    sorted.sort_by(|a, b| b.area().total_cmp(&a.area()));
    for (i, tile) in sorted.iter().take(10).enumerate() {
        let node = tree.get(tile.node);
        println!(
            "    [{}] '{}' (depth {}) - {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) - value {}",
            i,
            node.name,
            tile.depth,
            tile.w,
            tile.h,
            tile.area(),
            tile.x,
            tile.y,
            node.value_text()
        );
    }

    println!("\n[5] Checking coverage:");
    let leaf_area: f64 = leaves.iter().map(|t| t.area()).sum();
    let viewport_area = config.width * config.height;
    println!("    Leaf area:     {:.0}px²", leaf_area);
    println!("    Viewport area: {:.0}px²", viewport_area);
    println!("    Coverage: {:.1}% (rest is padding)", leaf_area / viewport_area * 100.0);
    let degenerate = leaves.iter().filter(|t| t.w <= 0.0 || t.h <= 0.0).count();
    println!("    Degenerate tiles: {}", degenerate);

    println!("\n[6] Palette (seed {}):", args.seed);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let palette = Palette::new(shuffle(&dataset.categories, &mut rng));
    for (i, category) in palette.order().iter().enumerate() {
        println!(
            "    [{}] {:<8} t={:.3} {}",
            i,
            category,
            palette.scale(i),
            palette.color_at(i)
        );
    }

    if let Some(point) = &args.point {
        let (x, y) = parse_point(point)?;
        println!("\n[7] Tooltip at ({}, {}):", x, y);
        match tooltip_at(tree, &layout, x, y) {
            Some(info) => {
                for row in info.rows() {
                    println!("    {}", row);
                }
            }
            None => println!("    (no tile)"),
        }
    }

    Ok(())
}
