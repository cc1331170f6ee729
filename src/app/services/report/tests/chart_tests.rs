//! Tests for SVG bar charts

use super::super::chart::{chart_file_name, render_bar_chart};
use super::create_table;
use crate::app::models::{Dimension, FrequencyTable};

#[test]
fn test_bars_follow_table_order() {
    let table = create_table(
        Dimension::WeatherCondition,
        &[("Fair", 10), ("Cloudy", 4), ("Rain", 4)],
    );

    let svg = render_bar_chart(&table).unwrap();

    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<rect").count(), 3);
    let fair = svg.find(">Fair</text>").unwrap();
    let cloudy = svg.find(">Cloudy</text>").unwrap();
    let rain = svg.find(">Rain</text>").unwrap();
    assert!(fair < cloudy && cloudy < rain);
    assert!(svg.contains("Accidents by Weather Condition"));
}

#[test]
fn test_labels_are_escaped() {
    let table = create_table(Dimension::RoadCondition, &[("Wet & <Icy>", 1)]);
    let svg = render_bar_chart(&table).unwrap();
    assert!(svg.contains("Wet &amp; &lt;Icy&gt;"));
    assert!(!svg.contains("<Icy>"));
}

#[test]
fn test_tallest_bar_fills_plot() {
    let table = create_table(Dimension::TimeOfDay, &[("Night", 8), ("Morning", 2)]);
    let svg = render_bar_chart(&table).unwrap();
    assert!(svg.contains(r#"height="260.0""#));
    assert!(svg.contains(r#"height="65.0""#));
}

#[test]
fn test_empty_table_renders_nothing() {
    assert!(render_bar_chart(&FrequencyTable::empty(Dimension::Severity)).is_none());
}

#[test]
fn test_chart_file_names() {
    assert_eq!(
        chart_file_name(Dimension::WeatherCondition),
        "accidents_by_weather_condition.svg"
    );
    assert_eq!(
        chart_file_name(Dimension::RoadCondition),
        "accidents_by_road_condition.svg"
    );
    assert_eq!(
        chart_file_name(Dimension::TimeOfDay),
        "accidents_by_time_of_day.svg"
    );
}
