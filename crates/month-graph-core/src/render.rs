// File: crates/month-graph-core/src/render.rs
// Summary: Render options and the backend-agnostic draw pass over a `Canvas`.

use log::trace;
use serde::Deserialize;

use crate::axis::LabelFormat;
use crate::canvas::{Canvas, Stroke, TextAlign, TextStyle};
use crate::geometry::{clamp, PointF, RectF};
use crate::graph::GraphState;
use crate::grid::linspace;
use crate::layout::{layout, GraphLayout, Period};
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

/// How each value is marked inside its segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkStyle {
    #[default]
    Bars,
    /// Points at segment centers joined by a polyline.
    Line,
}

/// Side length of the square point marker in `MarkStyle::Line`.
const POINT_SIZE: f32 = 6.0;

/// Minimum horizontal space between two month labels.
const LABEL_GAP: f32 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Preferred surface size for backends that allocate their own surface.
    pub width: i32,
    pub height: i32,
    pub top_inset: u32,
    /// Space below the plot reserved for month labels.
    pub label_band: u32,
    pub mark_style: MarkStyle,
    /// Bar width as a fraction of the segment width.
    pub bar_fill_ratio: f32,
    /// Horizontal grid lines across the plot (fewer than 2 disables them).
    pub grid_lines: usize,
    pub draw_labels: bool,
    /// Label every n-th month. `None` picks the smallest step at which
    /// measured labels do not overlap.
    pub label_every: Option<usize>,
    pub draw_value_labels: bool,
    pub label_format: LabelFormat,
    pub label_size: f32,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            top_inset: 24,
            label_band: 56,
            mark_style: MarkStyle::Bars,
            bar_fill_ratio: 0.6,
            grid_lines: 5,
            draw_labels: true,
            label_every: None,
            draw_value_labels: true,
            label_format: LabelFormat::Long,
            label_size: 14.0,
            theme: Theme::dark(),
        }
    }
}

/// Draw `state` onto `canvas` and return the layout that was drawn.
pub fn render<C: Canvas + ?Sized>(state: &GraphState, canvas: &mut C, opts: &RenderOptions) -> GraphLayout {
    let (width, height) = canvas.size();
    let l = layout(state, width, height, opts);
    trace!("render {}x{}: {} segment(s), {} mark(s)", width, height, l.segments.len(), l.mark_count());

    canvas.clear(opts.theme.background);
    draw_grid(canvas, &l, opts);
    draw_axis(canvas, &l, opts);
    match opts.mark_style {
        MarkStyle::Bars => draw_bars(canvas, &l, opts),
        MarkStyle::Line => draw_line(canvas, &l, opts),
    }
    if opts.draw_labels {
        draw_month_labels(canvas, &l, opts);
    }
    if opts.draw_value_labels {
        draw_value_labels(canvas, &l, opts);
    }
    l
}

/// Compact value label: `950`, `10k`, `1.5M`.
pub fn compact_value(v: u64) -> String {
    const UNITS: [(u64, &str); 4] = [(1_000_000_000_000, "T"), (1_000_000_000, "G"), (1_000_000, "M"), (1_000, "k")];
    for (div, suffix) in UNITS {
        if v >= div {
            let whole = v / div;
            let tenth = (v % div) * 10 / div;
            return if tenth == 0 || whole >= 100 {
                format!("{whole}{suffix}")
            } else {
                format!("{whole}.{tenth}{suffix}")
            };
        }
    }
    v.to_string()
}

/// Month label step for `l`: the configured `label_every`, or the smallest
/// step whose spacing fits the widest measured label plus a gap.
pub fn label_step<C: Canvas + ?Sized>(canvas: &C, l: &GraphLayout, opts: &RenderOptions) -> usize {
    if let Some(n) = opts.label_every {
        return n.max(1);
    }
    let style = month_label_style(opts);
    let widest = l
        .segments
        .iter()
        .map(|s| canvas.measure_text(&s.label.text, &style))
        .fold(0.0_f32, f32::max);
    let seg_w = l.x_scale.segment_width;
    if seg_w <= 0.0 {
        // no room at all: keep only the first label
        return l.segments.len().max(1);
    }
    (((widest + LABEL_GAP) / seg_w).ceil() as usize).max(1)
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C, l: &GraphLayout, opts: &RenderOptions) {
    let stroke = Stroke { color: opts.theme.grid, width: 1.0 };
    let p = l.plot;

    if opts.grid_lines >= 2 {
        // skip the bottom line, the axis covers it
        let ys = linspace(p.top as f64, p.bottom as f64, opts.grid_lines);
        for y in ys.iter().take(ys.len() - 1) {
            canvas.draw_line(PointF::new(p.left, *y as f32), PointF::new(p.right, *y as f32), &stroke);
        }
    }
    // segment separators
    for s in l.segments.iter().skip(1) {
        canvas.draw_line(PointF::new(s.left, p.top), PointF::new(s.left, p.bottom), &stroke);
    }
}

fn draw_axis<C: Canvas + ?Sized>(canvas: &mut C, l: &GraphLayout, opts: &RenderOptions) {
    let stroke = Stroke { color: opts.theme.axis_line, width: 1.5 };
    canvas.draw_line(
        PointF::new(l.plot.left, l.baseline_y),
        PointF::new(l.plot.right, l.baseline_y),
        &stroke,
    );
}

fn draw_bars<C: Canvas + ?Sized>(canvas: &mut C, l: &GraphLayout, opts: &RenderOptions) {
    let ratio = clamp(opts.bar_fill_ratio, 0.05, 1.0);
    let half = l.x_scale.segment_width * ratio * 0.5;
    for s in &l.segments {
        if s.value.is_none() {
            continue;
        }
        let rect = RectF::from_ltrb(s.center_x - half, s.mark_top, s.center_x + half, l.baseline_y);
        canvas.fill_rect(rect, opts.theme.period_color(s.period));
    }
}

fn draw_line<C: Canvas + ?Sized>(canvas: &mut C, l: &GraphLayout, opts: &RenderOptions) {
    let stroke = Stroke { color: opts.theme.line_stroke, width: 2.0 };
    let points: Vec<(PointF, Period)> = l
        .segments
        .iter()
        .filter(|s| s.value.is_some())
        .map(|s| (PointF::new(s.center_x, s.mark_top), s.period))
        .collect();

    for pair in points.windows(2) {
        canvas.draw_line(pair[0].0, pair[1].0, &stroke);
    }
    let half = POINT_SIZE * 0.5;
    for (p, period) in &points {
        let rect = RectF::from_ltrb(p.x - half, p.y - half, p.x + half, p.y + half);
        canvas.fill_rect(rect, opts.theme.period_color(*period));
    }
}

fn month_label_style(opts: &RenderOptions) -> TextStyle {
    TextStyle {
        size: opts.label_size,
        color: opts.theme.axis_label,
        align: TextAlign::Center,
        mono_numeric: false,
    }
}

fn draw_month_labels<C: Canvas + ?Sized>(canvas: &mut C, l: &GraphLayout, opts: &RenderOptions) {
    let style = month_label_style(opts);
    let step = label_step(canvas, l, opts);
    let y = l.plot.bottom + (opts.label_band as f32 + opts.label_size) * 0.5;
    for s in l.segments.iter().step_by(step) {
        canvas.draw_text(&s.label.text, PointF::new(s.center_x, y), &style);
    }
}

fn draw_value_labels<C: Canvas + ?Sized>(canvas: &mut C, l: &GraphLayout, opts: &RenderOptions) {
    let style = TextStyle {
        size: opts.label_size * 0.85,
        color: opts.theme.value_label,
        align: TextAlign::Center,
        mono_numeric: true,
    };
    for s in &l.segments {
        if let Some(v) = s.value {
            canvas.draw_text(&compact_value(v), PointF::new(s.center_x, s.mark_top - 6.0), &style);
        }
    }
}
