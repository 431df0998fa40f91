//! Paint the demo map into both a recording surface and a Vello scene.
//!
//! Run with `RUST_LOG=trace` to see every idea and label as it is painted.

use mm_core::{Grid, MapperConfig, MindMap, Viewport};
use mm_render::{DrawOp, RecordingSurface, SceneSurface, paint_scene};

fn main() {
    env_logger::init();

    let cfg = MapperConfig::default();
    let mut recording = RecordingSurface::new(800.0, 600.0);
    let mut map = MindMap::new(&cfg);
    if let Err(e) = seed(&mut map, &recording) {
        log::error!("seeding demo map failed: {e}");
        return;
    }

    let mut grid = Grid::new(cfg.playground(), cfg.grid_size, cfg.grid_color);
    let viewport = Viewport {
        x: 0,
        y: 0,
        width: 800,
        height: 600,
    };

    paint_scene(&mut recording, &map, &mut grid, &viewport);
    let labels = recording.count(|op| matches!(op, DrawOp::FillText { .. }));
    log::info!("{} ops, {labels} labels", recording.ops().len());

    let mut scene = SceneSurface::new(800.0, 600.0);
    paint_scene(&mut scene, &map, &mut grid, &viewport);
    log::info!("vello scene built for {} ideas", map.len());
}

fn seed(map: &mut MindMap, measure: &RecordingSurface) -> mm_core::error::Result<()> {
    let topic = map.create_idea(None, 200, 200, "Topic", None, measure)?;
    let mut fourth = topic;
    for (x, y, text) in [
        (100, 100, "First"),
        (200, 100, "Second"),
        (100, 300, "Third"),
        (200, 300, "Fourth"),
    ] {
        fourth = map.create_idea(Some(topic), x, y, text, None, measure)?;
    }
    for (y, text) in [(350, "First"), (400, "Second"), (450, "Third"), (500, "Fourth")] {
        map.create_idea(Some(fourth), 275, y, text, None, measure)?;
    }
    Ok(())
}
