// File: crates/month-graph-core/src/resources.rs
// Summary: Dimension resources and the resolver capability injected into MonthGraph.
// Notes:
// - Unit conversion follows the usual display-metric rules: 1dp is one pixel
//   at 160 dpi, sp additionally follows the user's font scale.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::GraphError;

/// Baseline density (dpi) that 1dp is defined against.
pub const DENSITY_DEFAULT_DPI: f32 = 160.0;

/// Identifier of the horizontal content inset used by the upstream screen.
pub const CONTENT_INSET_MATERIAL: &str = "abc_action_bar_content_inset_material";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Px,
    Dp,
    Sp,
    Pt,
    In,
    Mm,
}

impl DimensionUnit {
    fn suffix(self) -> &'static str {
        match self {
            DimensionUnit::Px => "px",
            DimensionUnit::Dp => "dp",
            DimensionUnit::Sp => "sp",
            DimensionUnit::Pt => "pt",
            DimensionUnit::In => "in",
            DimensionUnit::Mm => "mm",
        }
    }
}

/// A dimension value with its unit, e.g. `16dp`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Dimension {
    pub value: f32,
    pub unit: DimensionUnit,
}

impl Dimension {
    pub const fn new(value: f32, unit: DimensionUnit) -> Self { Self { value, unit } }
    pub const fn px(value: f32) -> Self { Self::new(value, DimensionUnit::Px) }
    pub const fn dp(value: f32) -> Self { Self::new(value, DimensionUnit::Dp) }
    pub const fn sp(value: f32) -> Self { Self::new(value, DimensionUnit::Sp) }

    /// Convert to (fractional) pixels.
    pub fn to_px(&self, density: f32, scaled_density: f32) -> f32 {
        let xdpi = DENSITY_DEFAULT_DPI * density;
        match self.unit {
            DimensionUnit::Px => self.value,
            DimensionUnit::Dp => self.value * density,
            DimensionUnit::Sp => self.value * scaled_density,
            DimensionUnit::Pt => self.value * xdpi / 72.0,
            DimensionUnit::In => self.value * xdpi,
            DimensionUnit::Mm => self.value * xdpi / 25.4,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Dimension {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |reason: &str| GraphError::InvalidDimension { id: trimmed.to_owned(), reason: reason.to_owned() };
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| invalid("missing unit"))?;
        let (number, unit) = trimmed.split_at(split);
        let unit = match unit.to_ascii_lowercase().as_str() {
            "px" => DimensionUnit::Px,
            "dp" | "dip" => DimensionUnit::Dp,
            "sp" => DimensionUnit::Sp,
            "pt" => DimensionUnit::Pt,
            "in" => DimensionUnit::In,
            "mm" => DimensionUnit::Mm,
            _ => return Err(invalid("unknown unit")),
        };
        let value: f32 = number.trim().parse().map_err(|_| invalid("not a number"))?;
        Ok(Self { value, unit })
    }
}

impl TryFrom<String> for Dimension {
    type Error = GraphError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

/// Whole-pixel offset of a fractional measurement: truncated toward zero.
pub fn to_pixel_offset(px: f32) -> i32 {
    px.trunc() as i32
}

/// Lookup from a symbolic identifier to a concrete measurement.
pub trait ResourceResolver {
    /// Resolve `id` to fractional pixels.
    fn resolve_dimension(&self, id: &str) -> Result<f32, GraphError>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    fn resolve_dimension(&self, id: &str) -> Result<f32, GraphError> { (**self).resolve_dimension(id) }
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Box<R> {
    fn resolve_dimension(&self, id: &str) -> Result<f32, GraphError> { (**self).resolve_dimension(id) }
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Arc<R> {
    fn resolve_dimension(&self, id: &str) -> Result<f32, GraphError> { (**self).resolve_dimension(id) }
}

fn default_density() -> f32 { 1.0 }

/// In-memory dimension table for one display configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DimensionTable {
    #[serde(default = "default_density")]
    pub density: f32,
    /// Defaults to `density` (font scale 1.0).
    #[serde(default)]
    pub scaled_density: Option<f32>,
    #[serde(default)]
    pub dimensions: HashMap<String, Dimension>,
}

impl DimensionTable {
    pub fn new(density: f32) -> Self {
        Self { density, scaled_density: None, dimensions: HashMap::new() }
    }

    /// Table holding the material content inset (16dp).
    pub fn material_defaults(density: f32) -> Self {
        Self::new(density).with_dimension(CONTENT_INSET_MATERIAL, Dimension::dp(16.0))
    }

    pub fn with_dimension(mut self, id: impl Into<String>, dim: Dimension) -> Self {
        self.insert(id, dim);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, dim: Dimension) -> Option<Dimension> {
        self.dimensions.insert(id.into(), dim)
    }

    pub fn get(&self, id: &str) -> Option<&Dimension> { self.dimensions.get(id) }

    fn scaled(&self) -> f32 { self.scaled_density.unwrap_or(self.density) }
}

impl Default for DimensionTable {
    fn default() -> Self { Self::material_defaults(1.0) }
}

impl ResourceResolver for DimensionTable {
    fn resolve_dimension(&self, id: &str) -> Result<f32, GraphError> {
        let dim = self.get(id).ok_or_else(|| GraphError::UnknownResource { id: id.to_owned() })?;
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(GraphError::InvalidDimension {
                id: id.to_owned(),
                reason: format!("display density {} must be positive", self.density),
            });
        }
        Ok(dim.to_px(self.density, self.scaled()))
    }
}
