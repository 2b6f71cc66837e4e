// File: crates/month-graph-demo/src/config.rs
// Summary: YAML demo configuration and CSV value loading.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use month_graph_core::resources::CONTENT_INSET_MATERIAL;
use month_graph_core::{theme, DimensionTable, LabelFormat, MarkStyle, RenderOptions};

fn default_padding_dimension() -> String { CONTENT_INSET_MATERIAL.to_owned() }

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub theme: Option<String>,
    pub mark_style: Option<MarkStyle>,
    pub label_format: Option<LabelFormat>,
    /// Label every n-th month; omitted means pick from measured label widths.
    pub label_every: Option<usize>,
    /// Dimension resolved for the horizontal padding.
    #[serde(default = "default_padding_dimension")]
    pub padding_dimension: String,
    #[serde(default)]
    pub resources: DimensionTable,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            theme: None,
            mark_style: None,
            label_format: None,
            label_every: None,
            padding_dimension: default_padding_dimension(),
            resources: DimensionTable::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let cfg: Self = serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        info!("loaded config {}", path.display());
        Ok(cfg)
    }

    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::default();
        if let Some(w) = self.width { opts.width = w; }
        if let Some(h) = self.height { opts.height = h; }
        if let Some(name) = &self.theme { opts.theme = theme::find(name); }
        if let Some(style) = self.mark_style { opts.mark_style = style; }
        if let Some(format) = self.label_format { opts.label_format = format; }
        opts.label_every = self.label_every;
        opts
    }
}

/// Load monthly values from a CSV with a header row. Uses the `value` column
/// when present, otherwise the first column; unparsable rows are skipped.
pub fn load_values_csv(path: &Path) -> Result<Vec<u64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let column = rdr
        .headers()?
        .iter()
        .position(|h| h.eq_ignore_ascii_case("value"))
        .unwrap_or(0);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        match rec.get(column).and_then(|s| s.parse::<u64>().ok()) {
            Some(v) => out.push(v),
            None => warn!("skipping row {}: no non-negative integer in column {}", row + 1, column),
        }
    }
    Ok(out)
}
