// File: crates/month-graph-core/src/scale.rs
// Summary: Segment (X) and value (Y) scale transforms.

/// Value Y coordinate (a data value).
pub type Value = f64;

/// Horizontal scale splitting the usable width into equal monthly segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentScale {
    pub left_px: f32,
    pub segment_width: f32,
    pub count: usize,
}

impl SegmentScale {
    /// `count` is clamped to at least one segment; `usable_width` to zero.
    pub fn new(left_px: f32, usable_width: f32, count: usize) -> Self {
        let count = count.max(1);
        let segment_width = usable_width.max(0.0) / count as f32;
        Self { left_px, segment_width, count }
    }
    #[inline]
    pub fn left_of(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.segment_width
    }
    #[inline]
    pub fn right_of(&self, index: usize) -> f32 {
        self.left_of(index + 1)
    }
    #[inline]
    pub fn center_of(&self, index: usize) -> f32 {
        self.left_px + (index as f32 + 0.5) * self.segment_width
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    /// A zero-width range is widened to `vmin..vmin + 1`.
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_width_evenly() {
        let s = SegmentScale::new(10.0, 300.0, 3);
        assert_eq!(s.segment_width, 100.0);
        assert_eq!(s.left_of(1), 110.0);
        assert_eq!(s.right_of(2), 310.0);
        assert_eq!(s.center_of(0), 60.0);
    }

    #[test]
    fn zero_count_means_one_segment() {
        let s = SegmentScale::new(0.0, 50.0, 0);
        assert_eq!(s.count, 1);
        assert_eq!(s.center_of(0), 25.0);
    }

    #[test]
    fn flat_range_does_not_divide_by_zero() {
        let v = ValueScale::new_linear(0.0, 100.0, 0.0, 0.0);
        assert_eq!(v.vmax, 1.0);
        assert_eq!(v.to_px(0.0), 100.0);
        assert_eq!(v.to_px(1.0), 0.0);
        assert_eq!(v.to_px(0.5), 50.0);
    }
}
