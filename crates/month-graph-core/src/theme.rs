// File: crates/month-graph-core/src/theme.rs
// Summary: Light/Dark theming for MonthGraph rendering colors.

use crate::canvas::Color;
use crate::layout::Period;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    /// Marks for months before the current one.
    pub past: Color,
    pub current: Color,
    pub future: Color,
    pub line_stroke: Color,
    pub value_label: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            past: Color::from_argb(255, 96, 156, 255),
            current: Color::from_argb(255, 255, 176, 64),
            future: Color::from_argb(255, 70, 78, 96),
            line_stroke: Color::from_argb(255, 64, 160, 255),
            value_label: Color::from_argb(255, 150, 150, 160),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            past: Color::from_argb(255, 40, 120, 200),
            current: Color::from_argb(255, 230, 130, 20),
            future: Color::from_argb(255, 190, 196, 208),
            line_stroke: Color::from_argb(255, 32, 120, 200),
            value_label: Color::from_argb(255, 100, 100, 110),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            past: Color::from_argb(255, 0x00, 0xaa, 0xff),
            current: Color::from_argb(255, 0xff, 0xd0, 0x00),
            future: Color::from_argb(255, 0x66, 0x66, 0x66),
            line_stroke: Color::from_argb(255, 0x00, 0xff, 0xff),
            value_label: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }
}

impl Theme {
    /// Mark color for a month in `period`.
    pub fn period_color(&self, period: Period) -> Color {
        match period {
            Period::Past => self.past,
            Period::Current => self.current,
            Period::Future => self.future,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
