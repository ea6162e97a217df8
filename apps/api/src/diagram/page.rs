//! Standalone HTML page showing a pipeline run, with the track diagram drawn
//! client-side by Mermaid.

use crate::models::track::TrackReport;

pub const MERMAID_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js";

/// Height of the diagram viewport, in CSS pixels.
pub const DIAGRAM_HEIGHT_PX: u32 = 800;

/// Renders the full page for one run.
///
/// Every embedded string is HTML-escaped. Mermaid reads the container's text
/// content, so escaped entities reach it as the original diagram source.
pub fn render_page(report: &TrackReport) -> String {
    let tracks = if report.tracks.is_empty() {
        "<li><em>No valid track lines.</em></li>".to_string()
    } else {
        report
            .tracks
            .iter()
            .map(|line| format!("<li><code>{}</code></li>", escape_html(line)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let warning = report
        .warning
        .as_deref()
        .map(|w| format!("<p class=\"warning\">{}</p>", escape_html(w)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Learning Track</title>
<script src="{cdn}"></script>
<script>mermaid.initialize({{ startOnLoad: true }});</script>
<style>
  .diagram {{ height: {height}px; overflow: auto; }}
  .warning {{ color: #b45309; }}
</style>
</head>
<body>
<h1>Learning Track</h1>
<h2>Development Plan</h2>
<pre>{plan}</pre>
<h2>Generated Tracks (raw)</h2>
<pre>{raw}</pre>
<h2>Processed Tracks</h2>
<ul>
{tracks}
</ul>
{warning}
<h2>Diagram</h2>
<div class="diagram">
<div class="mermaid">
{diagram}
</div>
</div>
</body>
</html>
"#,
        cdn = MERMAID_CDN_URL,
        height = DIAGRAM_HEIGHT_PX,
        plan = escape_html(&report.plan),
        raw = escape_html(&report.raw_tracks),
        tracks = tracks,
        warning = warning,
        diagram = escape_html(&report.diagram),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
