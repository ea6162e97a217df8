//! Line grammar for graph-edge statements.
//!
//! A line is kept only when its whole trimmed text is one of three edge shapes:
//!
//! 1. `Id[Label] --> |any text| Id[Label]`
//! 2. `Id --> Id[Label]`
//! 3. `Id[Label] --> Id[Label]`
//!
//! `Id` is ASCII letters only (Mermaid node ids as the model is asked to write
//! them); `Label` is one or more characters other than `]`. Anything else the
//! model emits (prose, headings, code fences, blank lines) is dropped without
//! error.

use std::sync::LazyLock;

use regex::Regex;

/// The accepted edge shapes, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeShape {
    /// `A[x] --> |label| B[y]`
    PipeLabelled,
    /// `A --> B[y]`
    BareSource,
    /// `A[x] --> B[y]`
    LabelledNodes,
}

static EDGE_SHAPES: LazyLock<[(EdgeShape, Regex); 3]> = LazyLock::new(|| {
    [
        (
            EdgeShape::PipeLabelled,
            Regex::new(r"^[A-Za-z]+\[[^\]]+\] --> \|.*\| [A-Za-z]+\[[^\]]+\]$")
                .expect("pipe-labelled edge pattern"),
        ),
        (
            EdgeShape::BareSource,
            Regex::new(r"^[A-Za-z]+ --> [A-Za-z]+\[[^\]]+\]$").expect("bare-source edge pattern"),
        ),
        (
            EdgeShape::LabelledNodes,
            Regex::new(r"^[A-Za-z]+\[[^\]]+\] --> [A-Za-z]+\[[^\]]+\]$")
                .expect("labelled-nodes edge pattern"),
        ),
    ]
});

/// Returns the shape an (already trimmed) line matches, if any.
pub fn classify_line(line: &str) -> Option<EdgeShape> {
    EDGE_SHAPES
        .iter()
        .find(|(_, pattern)| pattern.is_match(line))
        .map(|(shape, _)| *shape)
}

/// Keeps the trimmed lines of `raw` that are well-formed edge statements, in order.
pub fn filter_valid_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| classify_line(line).is_some())
        .map(String::from)
        .collect()
}
