// File: crates/month-graph-core/src/graph.rs
// Summary: MonthGraph component: configuration setters, invalidation and the draw callback.

use chrono::{Local, NaiveDate};
use log::{debug, warn};

use crate::axis::months_between;
use crate::canvas::Canvas;
use crate::error::GraphError;
use crate::layout::GraphLayout;
use crate::render::{render, RenderOptions};
use crate::resources::{to_pixel_offset, ResourceResolver};

/// Everything a draw pass reads. Kept apart from [`MonthGraph`] so rendering
/// does not depend on the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphState {
    /// Leftmost month of the axis; only year and month are used.
    pub start_date: NaiveDate,
    /// Date whose month is drawn as current; earlier months are past, later future.
    pub today: NaiveDate,
    /// One value per month, oldest first.
    pub values: Vec<u64>,
    /// Symmetric left/right inset in pixels.
    pub horizontal_padding: u32,
}

impl GraphState {
    pub fn new(start_date: NaiveDate, today: NaiveDate) -> Self {
        Self { start_date, today, values: Vec::new(), horizontal_padding: 0 }
    }

    /// Number of monthly segments a draw pass produces.
    pub fn segment_count(&self) -> usize { self.values.len().max(1) }

    /// Segment offset of the current month; negative or past the last
    /// segment when today is outside the axis.
    pub fn current_index(&self) -> i64 { months_between(self.start_date, self.today) }

    /// `view_width - 2 * horizontal_padding`, saturating at zero.
    pub fn usable_width(&self, view_width: u32) -> u32 {
        view_width.saturating_sub(self.horizontal_padding.saturating_mul(2))
    }
}

impl Default for GraphState {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self::new(today, today)
    }
}

/// Chart of monthly values. The host configures it through the setters,
/// calls [`MonthGraph::invalidate`] and later runs a draw pass.
///
/// A new graph starts dirty so the host's first pass draws it.
pub struct MonthGraph<R: ResourceResolver> {
    resolver: R,
    state: GraphState,
    dirty: bool,
}

impl<R: ResourceResolver> MonthGraph<R> {
    /// Create a graph starting at the current month with no values.
    pub fn new(resolver: R) -> Self {
        Self::with_state(resolver, GraphState::default())
    }

    pub fn with_state(resolver: R, state: GraphState) -> Self {
        Self { resolver, state, dirty: true }
    }

    /// Resolve the dimension `id` and use it as the left/right inset.
    ///
    /// The resolved size is truncated toward zero. Negative or non-finite
    /// sizes are clamped to 0 with a warning. Returns the stored inset; on a
    /// lookup error the previous padding is kept. To remove the padding use
    /// `set_horizontal_padding_px(0)`.
    pub fn set_horizontal_padding(&mut self, id: &str) -> Result<u32, GraphError> {
        let px = self.resolver.resolve_dimension(id)?;
        let stored = if px.is_finite() && px >= 0.0 {
            to_pixel_offset(px).max(0) as u32
        } else {
            warn!("dimension '{}' resolved to {}px; clamping horizontal padding to 0", id, px);
            0
        };
        debug!("horizontal padding '{}' -> {}px", id, stored);
        self.state.horizontal_padding = stored;
        Ok(stored)
    }

    /// Store an already resolved inset; `0` means no padding at all.
    pub fn set_horizontal_padding_px(&mut self, px: u32) {
        self.state.horizontal_padding = px;
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        debug!("start date {}", date);
        self.state.start_date = date;
    }

    /// Override the date used to split past, current and future months.
    /// Defaults to the local date when the graph was created.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.state.today = today;
    }

    /// Replace the series; an empty series is valid.
    pub fn set_values<I: IntoIterator<Item = u64>>(&mut self, values: I) {
        self.state.values = values.into_iter().collect();
        debug!("{} value(s) set", self.state.values.len());
    }

    /// Request a redraw on the host's next draw pass. Never draws.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool { self.dirty }

    /// Draw callback: always renders and clears the dirty flag.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, opts: &RenderOptions) -> GraphLayout {
        let l = render(&self.state, canvas, opts);
        self.dirty = false;
        debug!("drew {} segment(s) starting {}", l.segments.len(), self.state.start_date);
        l
    }

    /// Draw only when invalidated since the last pass.
    pub fn draw_if_dirty<C: Canvas + ?Sized>(&mut self, canvas: &mut C, opts: &RenderOptions) -> Option<GraphLayout> {
        if self.dirty { Some(self.draw(canvas, opts)) } else { None }
    }

    pub fn start_date(&self) -> NaiveDate { self.state.start_date }
    pub fn values(&self) -> &[u64] { &self.state.values }
    pub fn horizontal_padding(&self) -> u32 { self.state.horizontal_padding }
    pub fn state(&self) -> &GraphState { &self.state }
}
