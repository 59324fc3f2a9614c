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

use serde::Serialize;
use std::collections::BTreeMap;
use swimlane_core::date::{DATE_FORMAT, date_of};
use swimlane_layout::{config::LayoutConfig, label::date_range_label, layout::TimelineLayout};
use swimlane_model::{entry::EntryKind, timeline::Timeline};

#[derive(Debug, Clone, Serialize)]
pub struct BarReport {
    pub id: u64,
    pub title: String,
    pub dates: String,
    pub lane: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub year: i32,
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionEntry {
    pub anchor: String,
    pub title: String,
    pub dates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub entries: usize,
    pub ongoing: usize,
    pub per_kind: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub preset: String,
    pub theme: String,
    pub assigner: String,
    pub present: String,
    pub lane_count: usize,
    pub width: f64,
    pub height: f64,
    pub inner_width: f64,
    pub axis_y: f64,
    pub present_x: f64,
    pub grid_lines: Vec<f64>,
    pub ticks: Vec<TickReport>,
    pub bars: Vec<BarReport>,
    pub stats: StatsReport,
    /// Detail lists per kind, newest first.
    pub sections: BTreeMap<String, Vec<SectionEntry>>,
}

/// Where the report was produced from, for its header fields.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub preset: &'a str,
    pub theme: &'a str,
    pub assigner: &'a str,
}

const SECTION_KINDS: [EntryKind; 2] = [EntryKind::Job, EntryKind::Education];

impl LayoutReport {
    pub fn new(
        ctx: ReportContext<'_>,
        timeline: &Timeline<i64>,
        config: &LayoutConfig,
        layout: &TimelineLayout,
    ) -> Self {
        let present = timeline.present();
        let present = date_of(present)
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| present.value().to_string());

        let bars = layout
            .bars
            .iter()
            .map(|b| BarReport {
                id: b.id.value(),
                title: b.tooltip.title.clone(),
                dates: b.tooltip.dates.clone(),
                lane: b.lane,
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                color: b.color.to_hex(),
                label: b.label.as_ref().map(|l| l.text.clone()),
                anchor: b.anchor.clone(),
            })
            .collect();

        let ticks = layout
            .ticks
            .iter()
            .map(|t| TickReport {
                year: t.year,
                x: t.x,
                label: t.label.clone(),
            })
            .collect();

        let sections = SECTION_KINDS
            .iter()
            .map(|kind| {
                let entries = timeline
                    .section(kind)
                    .into_iter()
                    .map(|e| SectionEntry {
                        anchor: timeline.anchor(e.id()).unwrap_or_default(),
                        title: e.title().to_string(),
                        dates: date_range_label(config.date_style(), e.start(), e.end()),
                        url: e.info().url().map(str::to_string),
                    })
                    .collect();
                (kind.to_string(), entries)
            })
            .collect();

        let stats = timeline.stats();

        Self {
            preset: ctx.preset.to_string(),
            theme: ctx.theme.to_string(),
            assigner: ctx.assigner.to_string(),
            present,
            lane_count: layout.lane_count,
            width: layout.width,
            height: layout.height,
            inner_width: layout.inner_width,
            axis_y: layout.axis_y,
            present_x: layout.present_x,
            grid_lines: layout.grid_lines.iter().map(|g| g.x).collect(),
            ticks,
            bars,
            stats: StatsReport {
                entries: stats.entries(),
                ongoing: stats.ongoing(),
                per_kind: stats.per_kind().clone(),
            },
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimlane_core::date::parse_date;
    use swimlane_layout::{color::Theme, lanes::FirstFitAssigner, layout::compute_layout};
    use swimlane_model::record::EntryRecord;

    fn record(start: &str, end: Option<&str>, title: &str, kind: &str) -> EntryRecord {
        EntryRecord {
            kind: Some(kind.to_string()),
            ..EntryRecord::new(start, end, title)
        }
    }

    #[test]
    fn test_report_carries_layout_and_sections() {
        let records = vec![
            record("2010-09-01", Some("2014-06-30"), "BSc", "education"),
            record("2012-01-01", Some("2013-01-01"), "Intern", "job"),
            record("2014-07-01", None, "Engineer", "job"),
        ];
        let present = parse_date("2021-01-01").unwrap();
        let timeline = Timeline::from_records(&records, present).unwrap();
        let config = LayoutConfig::cv();
        let layout =
            compute_layout(&timeline, &config, Theme::Light, Some(800.0), &FirstFitAssigner).unwrap();
        let ctx = ReportContext {
            preset: "cv",
            theme: "light",
            assigner: "FirstFit",
        };
        let report = LayoutReport::new(ctx, &timeline, &config, &layout);

        assert_eq!(report.present, "2021-01-01");
        assert_eq!(report.lane_count, 2);
        assert_eq!(report.bars.len(), 3);
        assert_eq!(report.bars[2].dates, "Jul 2014 – Present");
        assert!(report.bars[0].color.starts_with('#'));
        assert_eq!(report.ticks.last().unwrap().label, "Present");
        assert_eq!(report.stats.ongoing, 1);
        assert_eq!(report.stats.per_kind.get("job"), Some(&2));

        let jobs = &report.sections["job"];
        assert_eq!(jobs[0].title, "Engineer");
        assert_eq!(jobs[0].anchor, "target_2");
        assert_eq!(jobs[1].anchor, "target_1");
        assert_eq!(report.sections["education"][0].dates, "Sep 2010 – Jun 2014");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["bars"][0]["title"], "BSc");
        assert!(json["bars"][0].get("label").is_none());
    }
}
