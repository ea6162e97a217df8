//! Rewrites the pipe-delimited edge label so Mermaid can parse it.
//!
//! The label region runs from the first `|` to the last `|` that sit outside
//! `[...]` node labels, so a label containing `|` is treated as one region.
//! Inside it spaces become `_` and periods are removed. Node ids, arrows and
//! bracketed labels are copied byte for byte. A line with fewer than two such
//! pipes is left as written.

/// Byte offset of the first `|` outside `[...]`, scanning left to right.
fn first_pipe(line: &str) -> Option<usize> {
    let mut in_bracket = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '[' if !in_bracket => in_bracket = true,
            ']' if in_bracket => in_bracket = false,
            '|' if !in_bracket => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Byte offset of the last `|` outside `[...]`, scanning right to left.
fn last_pipe(line: &str) -> Option<usize> {
    let mut in_bracket = false;
    for (idx, ch) in line.char_indices().rev() {
        match ch {
            ']' if !in_bracket => in_bracket = true,
            '[' if in_bracket => in_bracket = false,
            '|' if !in_bracket => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Sanitizes the pipe label region of a single line.
pub fn sanitize_line(line: &str) -> String {
    let (start, end) = match (first_pipe(line), last_pipe(line)) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return line.to_string(),
    };

    let mut out = String::with_capacity(line.len());
    out.push_str(&line[..=start]);
    for ch in line[start + 1..end].chars() {
        match ch {
            ' ' => out.push('_'),
            '.' => {}
            _ => out.push(ch),
        }
    }
    out.push_str(&line[end..]);
    out
}

/// Sanitizes each line, preserving order and count.
pub fn sanitize_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| sanitize_line(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_spaces_and_periods_inside_pipes() {
        assert_eq!(
            sanitize_line("A[X] --> |Soft Skills.| B[Y]"),
            "A[X] --> |Soft_Skills| B[Y]"
        );
    }

    #[test]
    fn test_leaves_bracketed_labels_untouched() {
        assert_eq!(
            sanitize_line("Cert[AWS Cert. v2] --> |Step 1. Study| Exam[Final Exam.]"),
            "Cert[AWS Cert. v2] --> |Step_1_Study| Exam[Final Exam.]"
        );
    }

    #[test]
    fn test_line_without_pipes_passes_through() {
        let line = "Cloud --> AWS[AWS Cloud Practitioner.]";
        assert_eq!(sanitize_line(line), line);
    }

    #[test]
    fn test_region_spans_first_to_last_pipe() {
        assert_eq!(
            sanitize_line("A[x] --> |one two.| mid |three. four| B[y]"),
            "A[x] --> |one_two|_mid_|three_four| B[y]"
        );
    }

    #[test]
    fn test_label_with_inner_pipe_is_fully_sanitized() {
        let line = "A[x] --> |Step 1 | Intro. part| B[y]";
        assert!(crate::diagram::grammar::classify_line(line).is_some());

        let sanitized = sanitize_line(line);
        assert_eq!(sanitized, "A[x] --> |Step_1_|_Intro_part| B[y]");

        let start = sanitized.find('|').unwrap();
        let end = sanitized.rfind('|').unwrap();
        let label = &sanitized[start..=end];
        assert!(!label.contains(' ') && !label.contains('.'));
    }

    #[test]
    fn test_pipe_inside_bracket_label_is_not_a_segment() {
        let line = "A[left | right] --> B[a. b | c]";
        assert_eq!(sanitize_line(line), line);
    }

    #[test]
    fn test_single_pipe_is_kept_verbatim() {
        assert_eq!(
            sanitize_line("A[x] --> |open label. B[y. z]"),
            "A[x] --> |open label. B[y. z]"
        );
    }

    #[test]
    fn test_pipes_in_both_node_labels_are_not_the_region() {
        assert_eq!(
            sanitize_line("A[a | b.] --> |go on.| B[c | d.]"),
            "A[a | b.] --> |go_on| B[c | d.]"
        );
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(sanitize_line("A[x] --> || B[y]"), "A[x] --> || B[y]");
    }

    #[test]
    fn test_non_ascii_labels_survive() {
        assert_eq!(
            sanitize_line("Lider[Liderança] --> |Gestão de equipes.| Curso[Gestão ágil]"),
            "Lider[Liderança] --> |Gestão_de_equipes| Curso[Gestão ágil]"
        );
    }

    #[test]
    fn test_sanitization_is_idempotent() {
        let lines = vec![
            "A[X] --> |Soft Skills.| B[Y]".to_string(),
            "A --> B[c. d]".to_string(),
            "A[x] --> |a. b| mid |c d.| B[y]".to_string(),
            "A[x] --> |Step 1 | Intro. part| B[y]".to_string(),
            "A[x] --> |unclosed. label B[y]".to_string(),
        ];
        let once = sanitize_lines(&lines);
        let twice = sanitize_lines(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sanitize_lines_preserves_order_and_count() {
        let lines = vec![
            "B[b] --> |x y| C[c]".to_string(),
            "A --> B[b]".to_string(),
        ];
        assert_eq!(
            sanitize_lines(&lines),
            vec!["B[b] --> |x_y| C[c]", "A --> B[b]"]
        );
    }
}
