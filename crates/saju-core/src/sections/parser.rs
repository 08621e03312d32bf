use saju_types::FortuneType;

use super::table::SectionTable;

/// Marker that opens a section when it starts a line.
pub const HEADING_MARKER: &str = "## ";

/// One titled, collapsible part of a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneSection {
    /// Collapse/expand key derived from the label; not necessarily unique.
    pub id: String,
    /// Heading as written, glyphs included.
    pub title: String,
    pub icon: String,
    pub content: String,
    pub color: String,
}

impl FortuneSection {
    /// Heading without decorative glyphs.
    pub fn label(&self, table: &SectionTable) -> String {
        table.strip_glyphs(&self.title)
    }
}

/// Splits a reading into sections at `## ` headings.
#[derive(Debug, Clone, Copy)]
pub struct SectionParser {
    table: &'static SectionTable,
}

impl SectionParser {
    pub fn new(table: &'static SectionTable) -> Self {
        Self { table }
    }

    pub fn for_fortune_type(fortune_type: FortuneType) -> Self {
        Self::new(SectionTable::for_fortune_type(fortune_type))
    }

    pub fn table(&self) -> &'static SectionTable {
        self.table
    }

    /// Sections in order of appearance. Text before the first heading is
    /// dropped; text without headings yields no sections.
    pub fn parse(&self, text: &str) -> Vec<FortuneSection> {
        let mut sections = Vec::new();
        let mut current: Option<(&str, Vec<&str>)> = None;

        for line in text.lines() {
            if let Some(title) = line.strip_prefix(HEADING_MARKER) {
                if let Some((title, body)) = current.take() {
                    sections.push(self.build_section(title, &body));
                }
                current = Some((title, Vec::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line);
            }
        }

        if let Some((title, body)) = current {
            sections.push(self.build_section(title, &body));
        }

        log::debug!(
            "Parsed {} section(s) with the {} table",
            sections.len(),
            self.table.name()
        );
        sections
    }

    fn build_section(&self, title_line: &str, body: &[&str]) -> FortuneSection {
        let title = title_line.trim();
        let label = self.table.strip_glyphs(title);
        let style = self.table.classify(&label);

        FortuneSection {
            id: section_id(&label),
            title: title.to_string(),
            icon: style.icon.to_string(),
            content: body.join("\n").trim().to_string(),
            color: style.color.to_string(),
        }
    }
}

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Keep ASCII letters, ASCII digits and Hangul syllables only.
pub fn section_id(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || is_hangul_syllable(*c))
        .collect()
}
