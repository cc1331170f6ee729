//! SVG bar charts for frequency tables
//!
//! Bars are drawn left to right in the table's order, which is already
//! descending by count with first-encountered ties.

use super::markup::html_escape;
use crate::app::models::{Dimension, FrequencyTable};
use crate::constants::artifacts;

const BAR_COLOR: &str = "#3b82f6";
const MIN_SLOT_WIDTH: f64 = 36.0;
const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 260.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 110.0;
const MARGIN_RIGHT: f64 = 20.0;
const Y_TICKS: usize = 5;

/// Output file name for a dimension's chart
pub fn chart_file_name(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Severity => artifacts::SEVERITY_CHART,
        Dimension::WeatherCondition => artifacts::WEATHER_CHART,
        Dimension::RoadCondition => artifacts::ROAD_CHART,
        Dimension::TimeOfDay => artifacts::TIME_OF_DAY_CHART,
    }
}

/// Render a categorical bar chart; `None` for an empty table
pub fn render_bar_chart(table: &FrequencyTable) -> Option<String> {
    let max_count = table.top()?.count.max(1);

    let slot_width = (PLOT_WIDTH / table.entries.len() as f64).max(MIN_SLOT_WIDTH);
    let plot_width = slot_width * table.entries.len() as f64;
    let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
    let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + PLOT_HEIGHT;

    let mut bars = String::new();
    for (i, entry) in table.entries.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot_width;
        let bar_height = (entry.count as f64 / max_count as f64) * PLOT_HEIGHT;
        let y = baseline - bar_height;
        let label_x = x + slot_width / 2.0;
        let category = html_escape(&entry.category);

        bars.push_str(&format!(
            r##"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {}</title></rect>
"##,
            x + slot_width * 0.1,
            y,
            slot_width * 0.8,
            bar_height,
            BAR_COLOR,
            category,
            entry.count
        ));
        bars.push_str(&format!(
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="#374151" transform="rotate(-45, {:.1}, {:.1})">{}</text>
"##,
            label_x,
            baseline + 14.0,
            label_x,
            baseline + 14.0,
            category
        ));
    }

    let mut ticks = String::new();
    for step in 0..=Y_TICKS {
        let value = max_count as f64 * step as f64 / Y_TICKS as f64;
        let y = baseline - PLOT_HEIGHT * step as f64 / Y_TICKS as f64;
        ticks.push_str(&format!(
            r##"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#e5e7eb" stroke-width="1"/>
  <text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="#6b7280">{}</text>
"##,
            MARGIN_LEFT,
            y,
            MARGIN_LEFT + plot_width,
            y,
            MARGIN_LEFT - 6.0,
            y + 4.0,
            value.round() as usize
        ));
    }

    let title = format!("Accidents by {}", table.dimension.label());

    Some(format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}" style="background:white">
  <text x="{title_x:.1}" y="22" text-anchor="middle" font-size="15" font-weight="600" fill="#111827">{title}</text>
  <text x="16" y="{axis_y:.1}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 16, {axis_y:.1})">Number of Accidents</text>
{ticks}{bars}  <line x1="{left:.1}" y1="{baseline:.1}" x2="{right:.1}" y2="{baseline:.1}" stroke="#9ca3af" stroke-width="1.5"/>
  <text x="{title_x:.1}" y="{x_label_y:.1}" text-anchor="middle" font-size="12" fill="#6b7280">{dimension}</text>
</svg>
"##,
        width = width,
        height = height,
        title_x = width / 2.0,
        title = html_escape(&title),
        axis_y = MARGIN_TOP + PLOT_HEIGHT / 2.0,
        ticks = ticks,
        bars = bars,
        left = MARGIN_LEFT,
        right = MARGIN_LEFT + plot_width,
        baseline = baseline,
        x_label_y = height - 8.0,
        dimension = html_escape(table.dimension.label()),
    ))
}
