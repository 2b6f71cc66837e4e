// File: crates/month-graph-core/src/layout.rs
// Summary: Pure layout pass: plot rect, monthly segments, value scaling and labels.

use crate::axis::{month_label, MonthLabel};
use crate::geometry::RectF;
use crate::graph::GraphState;
use crate::render::RenderOptions;
use crate::scale::{SegmentScale, ValueScale};
use crate::types::{Insets, DEFAULT_VALUE_MAX};

/// Where a month sits relative to today's month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Past,
    Current,
    Future,
}

impl Period {
    fn of(index: usize, current: i64) -> Self {
        match (index as i64).cmp(&current) {
            std::cmp::Ordering::Less => Period::Past,
            std::cmp::Ordering::Equal => Period::Current,
            std::cmp::Ordering::Greater => Period::Future,
        }
    }
}

/// One monthly interval on the horizontal axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub left: f32,
    pub right: f32,
    pub center_x: f32,
    pub label: MonthLabel,
    pub period: Period,
    /// `None` only for the placeholder segment of an empty chart.
    pub value: Option<u64>,
    /// Top of the data mark; equals the baseline for zero and missing values.
    pub mark_top: f32,
}

/// Geometry of one draw pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLayout {
    pub plot: RectF,
    pub baseline_y: f32,
    pub x_scale: SegmentScale,
    pub y_scale: ValueScale,
    pub segments: Vec<Segment>,
}

impl GraphLayout {
    /// Horizontal space left after the symmetric padding.
    pub fn usable_width(&self) -> f32 { self.plot.width() }

    /// Number of data marks (one per value).
    pub fn mark_count(&self) -> usize {
        self.segments.iter().filter(|s| s.value.is_some()).count()
    }
}

/// Lay out `state` on a `width` x `height` surface.
///
/// The usable width `width - 2 * padding` saturates at zero and is split into
/// `max(values.len(), 1)` equal segments. Values scale linearly from zero to
/// the series maximum; an all-zero or empty series uses `0..DEFAULT_VALUE_MAX`.
pub fn layout(state: &GraphState, width: i32, height: i32, opts: &RenderOptions) -> GraphLayout {
    let insets = Insets::horizontal(state.horizontal_padding, opts.top_inset, opts.label_band);

    let usable_w = state.usable_width(width.max(0) as u32) as f32;
    let left = insets.left as f32;
    let top = insets.top as f32;
    let bottom = ((height as i64 - insets.bottom as i64) as f32).max(top);
    let plot = RectF::from_ltrb(left, top, left + usable_w, bottom);

    let count = state.segment_count();
    let current = state.current_index();
    let x_scale = SegmentScale::new(plot.left, usable_w, count);

    let vmax = match state.values.iter().copied().max() {
        Some(m) if m > 0 => m as f64,
        _ => DEFAULT_VALUE_MAX,
    };
    let y_scale = ValueScale::new_linear(plot.top, plot.bottom, 0.0, vmax);
    let baseline_y = y_scale.to_px(0.0);

    let segments = (0..count)
        .map(|i| {
            let value = state.values.get(i).copied();
            let mark_top = value.map(|v| y_scale.to_px(v as f64)).unwrap_or(baseline_y);
            Segment {
                index: i,
                left: x_scale.left_of(i),
                right: x_scale.right_of(i),
                center_x: x_scale.center_of(i),
                label: month_label(state.start_date, i as u32, opts.label_format),
                period: Period::of(i, current),
                value,
                mark_top,
            }
        })
        .collect();

    GraphLayout { plot, baseline_y, x_scale, y_scale, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state(values: Vec<u64>, pad: u32) -> GraphState {
        let oct = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        GraphState {
            start_date: oct,
            today: oct,
            values,
            horizontal_padding: pad,
        }
    }

    #[test]
    fn tallest_value_reaches_plot_top() {
        let opts = RenderOptions::default();
        let l = layout(&state(vec![10_000, 50_000, 10_000, 500_000], 0), 400, 300, &opts);
        assert_eq!(l.segments.len(), 4);
        assert_eq!(l.segments[3].mark_top, l.plot.top);
        let s0 = &l.segments[0];
        let expected = l.baseline_y - (l.baseline_y - l.plot.top) * 0.02;
        assert!((s0.mark_top - expected).abs() < 1e-3);
    }

    #[test]
    fn padding_larger_than_view_leaves_no_width() {
        let l = layout(&state(vec![1, 2], 300), 400, 300, &RenderOptions::default());
        assert_eq!(l.usable_width(), 0.0);
        assert!(l.segments.iter().all(|s| s.left == s.right));
    }

    #[test]
    fn periods_split_around_today() {
        let mut s = state(vec![1, 2, 3, 4], 0);
        s.today = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        let l = layout(&s, 400, 300, &RenderOptions::default());
        let periods: Vec<_> = l.segments.iter().map(|s| s.period).collect();
        assert_eq!(periods, [Period::Past, Period::Current, Period::Future, Period::Future]);

        s.today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let l = layout(&s, 400, 300, &RenderOptions::default());
        assert!(l.segments.iter().all(|s| s.period == Period::Past));
    }

    #[test]
    fn short_view_keeps_plot_non_inverted() {
        let l = layout(&state(vec![3], 0), 100, 10, &RenderOptions::default());
        assert!(l.plot.bottom >= l.plot.top);
    }
}
