// File: crates/month-graph-demo/src/main.rs
// Summary: Demo host: builds a MonthGraph, configures it, invalidates, and runs one draw pass to PNG.
// Usage: month-graph-demo [--config <yaml>] [--values <csv>] [--start <YYYY-MM-DD>] [--out <png>]

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use log::info;

use month_graph_core::MonthGraph;
use month_graph_skia::SkiaRenderExt;

use crate::config::{load_values_csv, DemoConfig};

/// Values shown when no CSV is given.
const SAMPLE_VALUES: [u64; 4] = [10_000, 50_000, 10_000, 500_000];

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    values: Option<PathBuf>,
    start: Option<NaiveDate>,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--values" => args.values = Some(PathBuf::from(value()?)),
            "--out" => args.out = Some(PathBuf::from(value()?)),
            "--start" => {
                let raw = value()?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid --start '{raw}', expected YYYY-MM-DD"))?;
                args.start = Some(date);
            }
            other => bail!("unknown argument '{other}'"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let opts = cfg.render_options();

    let values = match &args.values {
        Some(path) => load_values_csv(path).with_context(|| format!("failed to load values '{}'", path.display()))?,
        None => SAMPLE_VALUES.to_vec(),
    };
    println!("Loaded {} monthly value(s)", values.len());

    // The host owns the component and injects the resolver.
    let mut graph = MonthGraph::new(cfg.resources);
    let padding = graph
        .set_horizontal_padding(&cfg.padding_dimension)
        .with_context(|| format!("resolving padding dimension '{}'", cfg.padding_dimension))?;
    graph.set_start_date(args.start.unwrap_or_else(|| Local::now().date_naive()));
    graph.set_values(values);
    graph.invalidate();
    info!("horizontal padding {}px, start {}", padding, graph.start_date());

    // One pass of the host's draw loop.
    let out = args.out.unwrap_or_else(|| PathBuf::from("target/out/month_graph.png"));
    if graph.is_dirty() {
        graph.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}
