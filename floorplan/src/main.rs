use std::env;
use std::fs;

use floorplan_core::constants::DEFAULT_SCALE;
use floorplan_core::{ProjectSpec, blueprint_to_svg, generate_blueprint};
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: floorplan <project.json> <output.(svg|png|json)> [px_per_m]");
        std::process::exit(2);
    }
    let input = &args[1];
    let output = &args[2];
    let scale: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SCALE);

    let txt = fs::read_to_string(input)?;
    let spec: ProjectSpec = serde_json::from_str(&txt)?;

    let plan = generate_blueprint(&spec);
    if !plan.is_complete() {
        eprintln!(
            "warning: placed {} of {} requested rooms; no space for {:?}",
            plan.placed(),
            spec.room_count,
            plan.unplaced
        );
    }

    if output.ends_with(".json") {
        fs::write(output, serde_json::to_string_pretty(&plan.blueprint)?)?;
        return Ok(());
    }

    let (svg, w_px, h_px) = blueprint_to_svg(&plan.blueprint, scale);
    if output.ends_with(".svg") {
        fs::write(output, svg)?;
        return Ok(());
    }
    if !output.ends_with(".png") {
        return Err(format!("unsupported output format: {output}").into());
    }

    // PNG: render SVG -> RGBA and save (deterministic)
    let mut opt = usvg::Options::default();
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    opt.fontdb = std::sync::Arc::new(fontdb);
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| format!("SVG parse error: {e:?}"))?;
    let mut pixmap = tiny_skia::Pixmap::new(w_px, h_px).ok_or("pixmap alloc failed")?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    encode_png_deterministic(&pixmap, output)?;
    Ok(())
}

fn encode_png_deterministic(
    pixmap: &tiny_skia::Pixmap,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(path)?;
    let w = pixmap.width();
    let h = pixmap.height();
    let mut enc = Encoder::new(file, w, h);
    enc.set_color(ColorType::Rgba);
    enc.set_depth(BitDepth::Eight);
    enc.set_filter(FilterType::NoFilter);
    enc.set_compression(Compression::Default);
    let mut writer = enc.write_header()?;
    writer.write_image_data(pixmap.data())?;
    Ok(())
}
