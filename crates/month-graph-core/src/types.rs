// File: crates/month-graph-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1080;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Value range used when every value is zero or there is no data.
pub const DEFAULT_VALUE_MAX: f64 = 1.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Symmetric left/right inset with explicit top and bottom.
    pub const fn horizontal(pad: u32, top: u32, bottom: u32) -> Self {
        Self::new(pad, pad, top, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_is_symmetric() {
        let i = Insets::horizontal(16, 1, 2);
        assert_eq!((i.left, i.right, i.top, i.bottom), (16, 16, 1, 2));
    }
}
