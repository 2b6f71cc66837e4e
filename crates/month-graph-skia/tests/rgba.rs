// File: crates/month-graph-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chrono::NaiveDate;
use month_graph_core::{DimensionTable, MonthGraph, RenderOptions, Theme};
use month_graph_skia::SkiaRenderExt;

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut graph = MonthGraph::new(DimensionTable::default());
    graph.set_start_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    graph.set_today(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap());
    graph.set_values([4, 0, 2]);
    graph.set_horizontal_padding_px(10);

    let mut opts = RenderOptions::default();
    opts.width = 300;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    opts.draw_value_labels = false;
    opts.grid_lines = 0;
    let (px, w, h, stride) = graph.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let bg = Theme::dark().background;
    // Padding column keeps the background
    assert_eq!(pixel(&px, stride, 2, 100), [bg.r, bg.g, bg.b, 255]);

    // Center of the first (tallest) bar carries the current-month color
    let bar = Theme::dark().current;
    // plot 10..290, three 93.3px segments; first center ~56.7, plot rows 24..144
    assert_eq!(pixel(&px, stride, 56, 100), [bar.r, bar.g, bar.b, 255]);
}
