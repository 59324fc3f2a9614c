// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `swimlane`: reads a JSON array of timeline records, assigns lanes,
//! computes the chart layout and writes it as a JSON report.
//!
//! ```bash
//! swimlane demos/timeline.json --preset expanded --width 1200
//! RUST_LOG=debug swimlane demos/timeline.json --config layout.toml --output out.json
//! ```

mod overlay;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use overlay::LayoutOverlay;
use report::{LayoutReport, ReportContext};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};
use swimlane_core::date::{Day, present_boundary, present_boundary_today};
use swimlane_layout::{
    color::Theme,
    config::{LayoutConfig, Preset},
    lanes::{FirstFitAssigner, HeapAssigner, LaneAssigner},
    layout::compute_layout,
};
use swimlane_model::{record::EntryRecord, timeline::Timeline};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AssignerKind {
    FirstFit,
    Heap,
}

#[derive(Parser, Debug)]
#[command(
    name = "swimlane",
    version,
    about = "Lay out a timeline as a swim-lane chart",
    long_about = None
)]
struct Args {
    /// JSON array of timeline records.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Base layout: cv, about or expanded.
    #[arg(long, default_value_t = Preset::Cv)]
    preset: Preset,

    /// Color theme: light or dark.
    #[arg(long, default_value_t = Theme::Light)]
    theme: Theme,

    /// Chart width in pixels; the preset's fallback width when absent.
    #[arg(long)]
    width: Option<f64>,

    /// Treat this as the current year. Ongoing entries run to January 1
    /// of the following year.
    #[arg(long, value_name = "YEAR")]
    present_year: Option<i32>,

    /// TOML file whose settings are laid over the preset.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = AssignerKind::FirstFit)]
    assigner: AssignerKind,

    /// Write the report here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_present(year: Option<i32>) -> Result<Day> {
    match year {
        Some(y) => present_boundary(y).with_context(|| format!("Year {} is out of range", y)),
        None => Ok(present_boundary_today()),
    }
}

fn load_config(args: &Args) -> Result<LayoutConfig> {
    let base = args.preset.config();
    match &args.config {
        Some(path) => {
            let overlay = LayoutOverlay::load(path)?;
            debug!(?overlay, "applying layout overlay");
            Ok(overlay.apply(base)?.build()?)
        }
        None => Ok(base),
    }
}

fn load_timeline(args: &Args, present: Day) -> Result<Timeline<i64>> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let records: Vec<EntryRecord> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of records", args.input.display()))?;
    let timeline = Timeline::from_records(&records, present)
        .with_context(|| format!("Invalid timeline in {}", args.input.display()))?;
    Ok(timeline)
}

fn build_report<A: LaneAssigner<i64>>(
    args: &Args,
    timeline: &Timeline<i64>,
    config: &LayoutConfig,
    assigner: A,
) -> Result<LayoutReport> {
    let layout = compute_layout(timeline, config, args.theme, args.width, &assigner)?;
    info!(
        lanes = layout.lane_count,
        width = layout.width,
        height = layout.height,
        "layout computed"
    );
    let preset = args.preset.to_string();
    let theme = args.theme.to_string();
    let ctx = ReportContext {
        preset: &preset,
        theme: &theme,
        assigner: assigner.name(),
    };
    Ok(LayoutReport::new(ctx, timeline, config, &layout))
}

fn write_report(report: &LayoutReport, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, report)?;
            writer.flush()?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    enable_tracing();
    let args = Args::parse();

    let present = resolve_present(args.present_year)?;
    let config = load_config(&args)?;
    info!(preset = %args.preset, %config, "layout configuration");

    let timeline = load_timeline(&args, present)?;
    let stats = timeline.stats();
    info!(
        entries = stats.entries(),
        ongoing = stats.ongoing(),
        "timeline loaded"
    );

    let report = match args.assigner {
        AssignerKind::FirstFit => build_report(&args, &timeline, &config, FirstFitAssigner::new())?,
        AssignerKind::Heap => build_report(&args, &timeline, &config, HeapAssigner::new())?,
    };
    write_report(&report, args.output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_and_flags() {
        let args = Args::try_parse_from(["swimlane", "in.json"]).unwrap();
        assert_eq!(args.preset, Preset::Cv);
        assert_eq!(args.theme, Theme::Light);
        assert_eq!(args.assigner, AssignerKind::FirstFit);
        assert!(args.width.is_none());

        let args = Args::try_parse_from([
            "swimlane",
            "in.json",
            "--preset",
            "about",
            "--theme",
            "dark",
            "--width",
            "900",
            "--present-year",
            "2024",
            "--assigner",
            "heap",
        ])
        .unwrap();
        assert_eq!(args.preset, Preset::About);
        assert_eq!(args.theme, Theme::Dark);
        assert_eq!(args.width, Some(900.0));
        assert_eq!(args.present_year, Some(2024));
        assert_eq!(args.assigner, AssignerKind::Heap);

        assert!(Args::try_parse_from(["swimlane", "in.json", "--preset", "modal"]).is_err());
    }

    #[test]
    fn test_present_year_resolves_to_next_new_year() {
        let present = resolve_present(Some(2025)).unwrap();
        assert_eq!(
            present,
            swimlane_core::date::parse_date("2026-01-01").unwrap()
        );
    }
}
