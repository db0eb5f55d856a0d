use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use shift_timeline::modules::schedule::use_cases::render_schedule::handler::ScheduleRenderer;
use shift_timeline::shared::config::LayoutConfig;
use shift_timeline::shell::snapshot::Snapshot;

#[derive(Parser)]
#[command(name = "shift_timeline")]
#[command(about = "Lays out planned and actual shifts and prints the timeline as JSON", long_about = None)]
struct Args {
    /// Snapshot JSON file; stdin when omitted
    input: Option<PathBuf>,

    /// Layout config JSON file
    #[arg(long, env = "SHIFT_TIMELINE_CONFIG")]
    config: Option<PathBuf>,

    /// Container width in pixels, overrides the snapshot
    #[arg(short, long)]
    width: Option<f64>,

    #[arg(short, long)]
    mobile: bool,

    #[arg(short, long)]
    pretty: bool,
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading snapshot from stdin")?;
            Ok(raw)
        }
    }
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LayoutConfig::from_path(path)
            .with_context(|| format!("loading layout config {}", path.display()))?,
        None => LayoutConfig::default(),
    };

    let raw = read_input(args.input.as_ref())?;
    let mut snapshot = Snapshot::from_json(&raw).context("parsing snapshot")?;
    if let Some(width) = args.width {
        snapshot.viewport.container_width = Some(width);
    }
    if args.mobile {
        snapshot.viewport.is_mobile = Some(true);
    }
    let viewport = snapshot.viewport_in(&Local::now(), &config)?;

    let mut renderer = ScheduleRenderer::new(config);
    renderer.set_plan(snapshot.plan);
    renderer.set_fact(snapshot.fact);
    let layout = renderer.render(&viewport, &snapshot.filters);
    tracing::info!(
        rows = layout.rows.len(),
        cols = layout.grid.cols,
        from_ms = viewport.from_ms,
        to_ms = viewport.to_ms,
        "timeline laid out"
    );

    let out = if args.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{out}");
    Ok(())
}
