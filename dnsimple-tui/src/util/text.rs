//! Width-aware string helpers for list rows and detail panes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max` columns, ending with `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return take_columns(s, max).to_string();
    }
    format!("{}...", take_columns(s, max - 3))
}

/// Longest prefix of `s` that fits in `columns`.
fn take_columns(s: &str, columns: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            return &s[..i];
        }
        used += w;
    }
    s
}

/// Split `s` into chunks of at most `width` columns, ignoring word breaks.
/// Long TXT values have no spaces to wrap on.
pub fn hard_wrap(s: &str, width: usize) -> Vec<String> {
    if width == 0 || s.is_empty() {
        return vec![s.to_string()];
    }
    let mut lines = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let mut chunk = take_columns(rest, width);
        if chunk.is_empty() {
            // a single character wider than the line
            chunk = rest
                .char_indices()
                .nth(1)
                .map_or(rest, |(i, _)| &rest[..i]);
        }
        lines.push(chunk.to_string());
        rest = &rest[chunk.len()..];
    }
    lines
}

/// `label` followed by `value`, wrapped to `width` with continuation lines
/// indented under the value.
pub fn wrap_label_value(label: &str, value: &str, width: usize) -> Vec<String> {
    let indent = label.width();
    let available = width.saturating_sub(indent).max(10);
    hard_wrap(value, available)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            if i == 0 {
                format!("{label}{chunk}")
            } else {
                format!("{}{chunk}", " ".repeat(indent))
            }
        })
        .collect()
}

/// Keep at most `max` lines; the last kept line reports how many were hidden.
pub fn clip_lines(lines: Vec<String>, max: usize) -> Vec<String> {
    if max == 0 || lines.len() <= max {
        return lines;
    }
    let hidden = lines.len() - (max - 1);
    let mut kept: Vec<String> = lines.into_iter().take(max - 1).collect();
    kept.push(format!("... ({hidden} more lines)"));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_and_long() {
        assert_eq!(truncate("acme.dev", 20), "acme.dev");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        assert_eq!(truncate("abcdefghij", 3), "abc");
    }

    #[test]
    fn truncate_counts_wide_characters() {
        // each CJK character is two columns
        assert_eq!(truncate("日本語ドメイン", 7), "日本...");
    }

    #[test]
    fn hard_wrap_splits_evenly() {
        assert_eq!(hard_wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(hard_wrap("", 3), vec![""]);
    }

    #[test]
    fn label_value_indents_continuation() {
        let lines = wrap_label_value("Content: ", &"x".repeat(25), 19);
        assert_eq!(lines[0], format!("Content: {}", "x".repeat(10)));
        assert_eq!(lines[1], format!("         {}", "x".repeat(10)));
        assert_eq!(lines[2], format!("         {}", "x".repeat(5)));
    }

    #[test]
    fn clip_reports_hidden_lines() {
        let lines: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let clipped = clip_lines(lines, 4);
        assert_eq!(clipped, vec!["0", "1", "2", "... (7 more lines)"]);
    }
}
