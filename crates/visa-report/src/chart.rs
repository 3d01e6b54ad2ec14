//! SVG bar charts for frequency summaries.
//!
//! Charts are written to files instead of being shown in a window, so a
//! run never waits on user interaction. Each category is one slot on the
//! x axis; with a hue, the slot holds one bar per hue value.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{debug, info};
use visa_model::FrequencySummary;

use crate::error::{ReportError, Result};

const CHART_SIZE: (u32, u32) = (1000, 600);

/// Share of a category slot covered by its bars.
const SLOT_FILL: f64 = 0.8;

/// Longest category label drawn under the axis.
const MAX_LABEL_CHARS: usize = 18;

/// Renders every summary into `dir`, creating the directory if needed.
pub fn render_charts(summaries: &[FrequencySummary], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let paths = summaries
        .iter()
        .map(|summary| render_chart(summary, dir))
        .collect::<Result<Vec<_>>>()?;
    info!(dir = %dir.display(), charts = paths.len(), "rendered charts");
    Ok(paths)
}

/// Renders one summary to `<dir>/<chart id>.svg` and returns the path.
pub fn render_chart(summary: &FrequencySummary, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.svg", summary.chart.id));
    draw_bar_chart(summary, &path).map_err(|message| ReportError::Chart {
        path: path.clone(),
        message,
    })?;
    debug!(path = %path.display(), "wrote chart");
    Ok(path)
}

fn draw_bar_chart(summary: &FrequencySummary, path: &Path) -> std::result::Result<(), String> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let slots = summary.categories.len().max(1);
    let y_max = (summary.max_bar().max(1) as f64 * 1.1).ceil();
    let labels: Vec<String> = summary
        .categories
        .iter()
        .map(|category| short_label(&category.value))
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(summary.chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), 0f64..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| slot_label(&labels, *x))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .x_desc(summary.chart.x_label)
        .y_desc("Count")
        .label_style(("sans-serif", 13))
        .draw()
        .map_err(|e| e.to_string())?;

    if summary.hues.is_empty() {
        let color = Palette99::pick(0).filled();
        chart
            .draw_series(summary.categories.iter().enumerate().map(|(slot, category)| {
                bar(slot, 0, 1, category.total, color)
            }))
            .map_err(|e| e.to_string())?;
    } else {
        let width = summary.hues.len();
        for (hue_index, hue) in summary.hues.iter().enumerate() {
            let color = Palette99::pick(hue_index).filled();
            chart
                .draw_series(summary.categories.iter().enumerate().map(|(slot, category)| {
                    let count = category.by_hue.get(hue_index).copied().unwrap_or(0);
                    bar(slot, hue_index, width, count, color)
                }))
                .map_err(|e| e.to_string())?
                .label(hue.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color));
        }
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(|e| e.to_string())?;
    }

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

/// One bar inside a category slot, offset by its hue position.
fn bar(
    slot: usize,
    hue_index: usize,
    hue_count: usize,
    count: usize,
    style: ShapeStyle,
) -> Rectangle<(f64, f64)> {
    let (left, right) = bar_span(slot, hue_index, hue_count);
    Rectangle::new([(left, 0.0), (right, count as f64)], style)
}

fn bar_span(slot: usize, hue_index: usize, hue_count: usize) -> (f64, f64) {
    let width = SLOT_FILL / hue_count as f64;
    let left = slot as f64 - SLOT_FILL / 2.0 + hue_index as f64 * width;
    (left, left + width)
}

fn slot_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

fn short_label(value: &str) -> String {
    if value.chars().count() <= MAX_LABEL_CHARS {
        value.to_string()
    } else {
        let mut label: String = value.chars().take(MAX_LABEL_CHARS - 1).collect();
        label.push('…');
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_label_only_on_integer_positions() {
        let labels = vec!["A".to_string(), "B".to_string()];
        assert_eq!(slot_label(&labels, 1.0), "B");
        assert_eq!(slot_label(&labels, 0.5), "");
        assert_eq!(slot_label(&labels, -0.5), "");
        assert_eq!(slot_label(&labels, 2.0), "");
    }

    #[test]
    fn test_short_label_truncates() {
        assert_eq!(short_label("NEW YORK"), "NEW YORK");
        let long = short_label("software development engineer in test");
        assert_eq!(long.chars().count(), MAX_LABEL_CHARS);
        assert!(long.ends_with('…'));
    }

    #[test]
    fn test_bars_split_slot_by_hue() {
        let (left, middle) = bar_span(2, 0, 2);
        let (next, right) = bar_span(2, 1, 2);
        assert!((left - 1.6).abs() < 1e-9);
        assert!((middle - 2.0).abs() < 1e-9);
        assert!((next - middle).abs() < 1e-9);
        assert!((right - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_single_series_bar_is_centered() {
        let (left, right) = bar_span(0, 0, 1);
        assert!((left + right).abs() < 1e-9);
    }
}
