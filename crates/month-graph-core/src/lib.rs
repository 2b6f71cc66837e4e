// File: crates/month-graph-core/src/lib.rs
// Summary: Core library entry point; exports the MonthGraph component, layout and canvas API.

pub mod error;
pub mod types;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod axis;
pub mod theme;
pub mod resources;
pub mod canvas;
pub mod layout;
pub mod render;
pub mod graph;

pub use error::GraphError;
pub use graph::{GraphState, MonthGraph};
pub use axis::{LabelFormat, MonthLabel};
pub use canvas::{Canvas, Color, DrawCommand, Recorder, Stroke, TextAlign, TextStyle};
pub use layout::{layout, GraphLayout, Period, Segment};
pub use render::{label_step, render, MarkStyle, RenderOptions};
pub use resources::{Dimension, DimensionTable, DimensionUnit, ResourceResolver};
pub use theme::Theme;
