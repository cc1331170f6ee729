//! Composed report page

use super::assembler::ReportInput;
use super::markup::html_escape;
use crate::app::models::{Dimension, SummaryTable};

/// Relative links to the artifacts the page embeds
#[derive(Debug, Clone, Default)]
pub struct PageLinks<'a> {
    pub charts: Vec<(Dimension, &'a str)>,
    pub map: Option<&'a str>,
}

/// Render the composed page linking every written artifact
pub fn render_page(input: &ReportInput<'_>, title: &str, links: &PageLinks<'_>) -> String {
    let body = if input.summary.is_empty() {
        r#"<section class="notice">
        <h2>No data</h2>
        <p>No records survived cleaning, so no charts or map were generated.</p>
    </section>"#
            .to_string()
    } else {
        format!(
            "{}\n    {}",
            render_charts(&links.charts),
            render_map(links.map)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    {metadata}
    {describe}
    {body}
</body>
</html>
"#,
        title = html_escape(title),
        css = inline_css(),
        metadata = render_metadata(input),
        describe = render_describe(input.summary),
        body = body,
    )
}

fn render_metadata(input: &ReportInput<'_>) -> String {
    format!(
        r#"<section class="metadata">
        <p><strong>Source:</strong> {source}</p>
        <p><strong>Records loaded:</strong> {loaded} &middot; <strong>Retained after cleaning:</strong> {retained} &middot; <strong>Excluded:</strong> {excluded}</p>
    </section>"#,
        source = html_escape(&input.source.display().to_string()),
        loaded = input.load_stats.records_loaded,
        retained = input.cleaning_stats.retained,
        excluded = input.cleaning_stats.excluded(),
    )
}

fn render_describe(summary: &SummaryTable) -> String {
    let rows: String = summary
        .describe()
        .iter()
        .map(|d| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                html_escape(d.dimension.label()),
                d.count,
                d.unique,
                d.top.as_deref().map(html_escape).unwrap_or_else(|| "-".to_string()),
                d.freq.map(|f| f.to_string()).unwrap_or_else(|| "-".to_string()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<section>
        <h2>Summary</h2>
        <table>
            <tr><th>Dimension</th><th>Count</th><th>Unique</th><th>Top</th><th>Freq</th></tr>
            {rows}
        </table>
    </section>"#
    )
}

fn render_charts(charts: &[(Dimension, &str)]) -> String {
    charts
        .iter()
        .map(|(dimension, file)| {
            format!(
                r#"<section class="chart">
        <h2>Accidents by {label}</h2>
        <img src="{file}" alt="Accidents by {label}">
    </section>"#,
                label = html_escape(dimension.label()),
                file = html_escape(file),
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

fn render_map(map: Option<&str>) -> String {
    match map {
        Some(file) => format!(
            r#"<section class="map">
        <h2>Accident Hotspots</h2>
        <iframe src="{}" title="Accident hotspots"></iframe>
    </section>"#,
            html_escape(file)
        ),
        None => r#"<section class="notice"><p>Hotspot map unavailable: no locations to plot.</p></section>"#
            .to_string(),
    }
}

fn inline_css() -> &'static str {
    "body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 2rem auto; max-width: 1000px; color: #111827; }
    table { border-collapse: collapse; margin: 1rem 0; }
    th, td { border: 1px solid #e5e7eb; padding: 0.4rem 0.8rem; text-align: left; }
    th { background: #f9fafb; }
    .chart img { max-width: 100%; }
    .map iframe { width: 100%; height: 600px; border: 1px solid #e5e7eb; }
    .notice { background: #fef3c7; padding: 1rem; border-radius: 6px; }"
}
