//! Tests for the HTML report assembler

use super::super::assembler::{HtmlReportAssembler, ReportAssembler, ReportInput};
use super::*;
use crate::config::ReportConfig;
use std::path::Path;
use tempfile::TempDir;

fn assembler_for(dir: &Path) -> HtmlReportAssembler {
    HtmlReportAssembler::new(ReportConfig {
        output_dir: dir.to_path_buf(),
        ..ReportConfig::default()
    })
}

#[test]
fn test_assemble_writes_every_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("report");
    let summary = create_summary();
    let map = create_density_map();
    let load = create_load_stats(3);
    let cleaning = create_cleaning_stats(3, 3);
    let input = ReportInput {
        source: Path::new("accidents.csv"),
        summary: &summary,
        density: Some(&map),
        load_stats: &load,
        cleaning_stats: &cleaning,
    };

    let artifacts = assembler_for(&output_dir).assemble(&input).unwrap();

    assert_eq!(artifacts.charts.len(), 3);
    for name in [
        "accidents_by_weather_condition.svg",
        "accidents_by_road_condition.svg",
        "accidents_by_time_of_day.svg",
        "accident_hotspots.html",
        "traffic_accident_analysis.html",
        "summary.json",
    ] {
        assert!(output_dir.join(name).is_file(), "{} missing", name);
    }
    assert!(!output_dir.join("accidents_by_severity.svg").exists());
    assert!(!artifacts.map_skipped);
    assert_eq!(artifacts.paths().len(), 6);
    assert_eq!(
        artifacts.page,
        output_dir.join("traffic_accident_analysis.html")
    );

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_dir.join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(json["summary"]["record_count"], 3);
    assert_eq!(json["density"]["point_count"], 2);
    assert_eq!(json["density"]["center"]["latitude"], 41.0);
}

#[test]
fn test_assemble_degenerate_input_skips_charts_and_map() {
    let temp_dir = TempDir::new().unwrap();
    let summary = SummaryTable::empty();
    let load = create_load_stats(3);
    let cleaning = create_cleaning_stats(3, 0);
    let input = ReportInput {
        source: Path::new("accidents.csv"),
        summary: &summary,
        density: None,
        load_stats: &load,
        cleaning_stats: &cleaning,
    };

    let artifacts = assembler_for(temp_dir.path()).assemble(&input).unwrap();

    assert!(artifacts.charts.is_empty());
    assert!(artifacts.map.is_none());
    assert!(artifacts.map_skipped);
    assert!(!temp_dir.path().join("accident_hotspots.html").exists());

    let page = std::fs::read_to_string(&artifacts.page).unwrap();
    assert!(page.contains("No data"));

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(artifacts.summary_json.unwrap()).unwrap(),
    )
    .unwrap();
    assert!(json["density"].is_null());
}

#[test]
fn test_assemble_without_summary_json() {
    let temp_dir = TempDir::new().unwrap();
    let assembler = HtmlReportAssembler::new(ReportConfig {
        output_dir: temp_dir.path().to_path_buf(),
        write_summary_json: false,
        charted_dimensions: vec![Dimension::Severity],
        ..ReportConfig::default()
    });
    let summary = create_summary();
    let map = create_density_map();
    let load = create_load_stats(3);
    let cleaning = create_cleaning_stats(3, 3);
    let input = ReportInput {
        source: Path::new("accidents.csv"),
        summary: &summary,
        density: Some(&map),
        load_stats: &load,
        cleaning_stats: &cleaning,
    };

    let artifacts = assembler.assemble(&input).unwrap();

    assert!(artifacts.summary_json.is_none());
    assert!(!temp_dir.path().join("summary.json").exists());
    assert_eq!(
        artifacts.charts,
        vec![temp_dir.path().join("accidents_by_severity.svg")]
    );
}

#[test]
fn test_assemble_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let summary = create_summary();
    let map = create_density_map();
    let load = create_load_stats(3);
    let cleaning = create_cleaning_stats(3, 3);
    let input = ReportInput {
        source: Path::new("accidents.csv"),
        summary: &summary,
        density: Some(&map),
        load_stats: &load,
        cleaning_stats: &cleaning,
    };
    let assembler = assembler_for(temp_dir.path());

    let first = assembler.assemble(&input).unwrap();
    let first_page = std::fs::read_to_string(&first.page).unwrap();
    let second = assembler.assemble(&input).unwrap();
    let second_page = std::fs::read_to_string(&second.page).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_page, second_page);
}

#[test]
fn test_assemble_fails_when_output_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("occupied");
    std::fs::write(&file_path, "x").unwrap();
    let summary = SummaryTable::empty();
    let load = create_load_stats(1);
    let cleaning = create_cleaning_stats(1, 0);
    let input = ReportInput {
        source: Path::new("accidents.csv"),
        summary: &summary,
        density: None,
        load_stats: &load,
        cleaning_stats: &cleaning,
    };

    let error = assembler_for(&file_path).assemble(&input).unwrap_err();
    assert!(matches!(error, crate::Error::Output { .. }));
}

#[test]
fn test_rerun_removes_artifacts_not_produced() {
    let temp_dir = TempDir::new().unwrap();
    let summary = create_summary();
    let map = create_density_map();
    let load = create_load_stats(3);
    let full_cleaning = create_cleaning_stats(3, 3);
    let full = ReportInput {
        source: Path::new("accidents.csv"),
        summary: &summary,
        density: Some(&map),
        load_stats: &load,
        cleaning_stats: &full_cleaning,
    };
    assembler_for(temp_dir.path()).assemble(&full).unwrap();
    assert!(temp_dir.path().join("accident_hotspots.html").is_file());

    let empty = SummaryTable::empty();
    let empty_cleaning = create_cleaning_stats(3, 0);
    let degenerate = ReportInput {
        source: Path::new("accidents.csv"),
        summary: &empty,
        density: None,
        load_stats: &load,
        cleaning_stats: &empty_cleaning,
    };
    let without_json = HtmlReportAssembler::new(ReportConfig {
        output_dir: temp_dir.path().to_path_buf(),
        write_summary_json: false,
        ..ReportConfig::default()
    });
    let artifacts = without_json.assemble(&degenerate).unwrap();

    for name in [
        "accidents_by_weather_condition.svg",
        "accidents_by_road_condition.svg",
        "accidents_by_time_of_day.svg",
        "accident_hotspots.html",
        "summary.json",
    ] {
        assert!(!temp_dir.path().join(name).exists(), "{} left behind", name);
    }
    let page = temp_dir.path().join("traffic_accident_analysis.html");
    assert_eq!(artifacts.paths(), vec![page.as_path()]);

    let mut remaining: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    remaining.sort();
    assert_eq!(remaining, vec!["traffic_accident_analysis.html"]);
}
