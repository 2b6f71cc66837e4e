// File: crates/month-graph-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small graphs to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
// - Independently of the snapshot file, asserts a few pixels at known layout positions.

use chrono::NaiveDate;
use month_graph_core::{Color, DimensionTable, MarkStyle, MonthGraph, RenderOptions, Theme};
use month_graph_skia::SkiaRenderExt;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(values: &[u64], style: MarkStyle) -> Vec<u8> {
    let mut graph = MonthGraph::new(DimensionTable::default());
    graph.set_start_date(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
    // second month is current
    graph.set_today(NaiveDate::from_ymd_opt(2026, 11, 15).unwrap());
    graph.set_values(values.iter().copied());
    graph.set_horizontal_padding_px(16);

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.mark_style = style;
    opts.draw_labels = false; // deterministic
    opts.draw_value_labels = false;
    graph.render_to_png_bytes(&opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

fn pixel(bytes: &[u8], x: u32, y: u32) -> [u8; 4] {
    image::load_from_memory(bytes).expect("decode png").to_rgba8().get_pixel(x, y).0
}

fn opaque(c: Color) -> [u8; 4] {
    [c.r, c.g, c.b, 255]
}

// Layout at 320x200 with 16px padding: plot x 16..304, y 24..144.

#[test]
fn golden_bars() {
    let bytes = render_bytes(&[10_000, 50_000, 10_000, 500_000], MarkStyle::Bars);
    let theme = Theme::dark();
    // four 72px segments, centers 52/124/196/268
    assert_eq!(pixel(&bytes, 4, 100), opaque(theme.background));
    assert_eq!(pixel(&bytes, 268, 100), opaque(theme.future));
    assert_eq!(pixel(&bytes, 124, 138), opaque(theme.current));
    // above the short current-month bar
    assert_eq!(pixel(&bytes, 124, 100), opaque(theme.background));
    write_or_compare(&snapshot_path("bars.png"), &bytes);
}

#[test]
fn golden_line() {
    let bytes = render_bytes(&[3, 9, 4, 7, 1, 8], MarkStyle::Line);
    let theme = Theme::dark();
    // six 48px segments; the 9 reaches the plot top, the 8 sits at y ~37.3
    assert_eq!(pixel(&bytes, 88, 25), opaque(theme.current));
    assert_eq!(pixel(&bytes, 280, 37), opaque(theme.future));
    write_or_compare(&snapshot_path("line.png"), &bytes);
}

#[test]
fn golden_all_zero() {
    let bytes = render_bytes(&[0, 0, 0], MarkStyle::Bars);
    let bg = opaque(Theme::dark().background);
    assert_eq!(pixel(&bytes, 4, 100), bg);
    for x in [64, 160, 256] {
        assert_eq!(pixel(&bytes, x, 100), bg, "zero bar painted at x={x}");
    }
    write_or_compare(&snapshot_path("all_zero.png"), &bytes);
}
