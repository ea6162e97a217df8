/// Mermaid graph header: top-down flowchart.
pub const GRAPH_HEADER: &str = "graph TD";

const INDENT: &str = "    ";

/// Builds the Mermaid document: header, then one indented line per edge, in order.
pub fn assemble_diagram(lines: &[String]) -> String {
    let mut document = format!("{GRAPH_HEADER}\n");
    for line in lines {
        document.push_str(INDENT);
        document.push_str(line);
        document.push('\n');
    }
    document
}
