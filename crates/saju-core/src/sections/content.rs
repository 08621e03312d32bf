//! Line-by-line formatting of a section body.

use once_cell::sync::Lazy;
use regex::Regex;

static STRONG_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Header row of a pillar table ("구분  천간  지지 ...").
static TABLE_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"구분\s+천간").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Strong(String),
}

/// How one body line is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    /// Paragraph break.
    Blank,
    /// Line with `**…**` emphasis.
    Emphasis(Vec<Span>),
    /// `- item`, marker removed.
    Bullet(String),
    /// Tab-delimited or pillar-table row, shown fixed-width as written.
    Table(String),
    Plain(String),
}

/// Classify every line of `content`; the first matching rule wins.
pub fn format_content(content: &str) -> Vec<ContentLine> {
    content.lines().map(format_line).collect()
}

pub fn format_line(line: &str) -> ContentLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ContentLine::Blank;
    }

    if line.contains("**") {
        return ContentLine::Emphasis(emphasis_spans(line));
    }

    if let Some(item) = trimmed.strip_prefix('-') {
        return ContentLine::Bullet(item.trim().to_string());
    }

    if line.contains('\t') || TABLE_HEADER.is_match(line) {
        return ContentLine::Table(line.to_string());
    }

    ContentLine::Plain(line.to_string())
}

/// Split a line into plain and strong spans. Markers without a partner are
/// left in the plain text.
pub fn emphasis_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in STRONG_PAIR.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Plain(line[last..whole.start()].to_string()));
        }
        spans.push(Span::Strong(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < line.len() {
        spans.push(Span::Plain(line[last..].to_string()));
    }

    spans
}
