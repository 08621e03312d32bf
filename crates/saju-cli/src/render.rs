use chrono::{NaiveDateTime, Timelike};
use crossterm::style::{style, Color, Stylize};
use saju_core::sections::{format_content, ContentLine, Span};
use saju_core::{ExpansionState, FortuneSection, SectionTable};
use saju_types::{FortuneResponse, FortuneType};

/// `#rrggbb` to a terminal color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

pub fn result_title(fortune_type: FortuneType) -> &'static str {
    match fortune_type {
        FortuneType::Daily => "🌟 오늘의 운세 결과",
        FortuneType::Tarot => "🎴 타로 해석 결과",
        FortuneType::Saju => "🔮 사주 해석 결과",
    }
}

/// Creation time in the Korean locale style, e.g. `2024. 5. 1. 오후 3:05:09`.
/// Unparseable timestamps are shown as received.
pub fn format_timestamp(response: &FortuneResponse) -> String {
    match response.created_at() {
        Some(created_at) => korean_date_time(&created_at),
        None => response.timestamp.clone(),
    }
}

fn korean_date_time(dt: &NaiveDateTime) -> String {
    let (pm, hour) = dt.hour12();
    format!(
        "{} {} {}:{:02}:{:02}",
        dt.format("%Y. %-m. %-d."),
        if pm { "오후" } else { "오전" },
        hour,
        dt.minute(),
        dt.second()
    )
}

/// Marker, icon and the heading with its own glyphs stripped, so the icon
/// is not shown twice.
pub fn section_header(section: &FortuneSection, table: &SectionTable, expanded: bool) -> String {
    let marker = if expanded { "▼" } else { "▶" };
    format!("{} {} {}", marker, section.icon, section.label(table))
}

/// One rendered line per content line, styled for the terminal.
pub fn render_content(content: &str) -> Vec<String> {
    format_content(content).iter().map(render_line).collect()
}

pub fn render_line(line: &ContentLine) -> String {
    match line {
        ContentLine::Blank => String::new(),
        ContentLine::Emphasis(spans) => spans
            .iter()
            .map(|span| match span {
                Span::Plain(text) => text.clone(),
                Span::Strong(text) => style(text).bold().to_string(),
            })
            .collect(),
        ContentLine::Bullet(text) => format!("  • {}", text),
        ContentLine::Table(text) => text.clone(),
        ContentLine::Plain(text) => text.clone(),
    }
}

/// Headers for every section, with bodies for the expanded ones.
pub fn render_sections(sections: &[FortuneSection], table: &SectionTable, state: &ExpansionState) -> Vec<String> {
    let mut lines = Vec::new();
    for section in sections {
        let expanded = state.is_expanded(&section.id);
        let header = section_header(section, table, expanded);
        let header = match parse_hex_color(&section.color) {
            Some(color) => style(&header).with(color).bold().to_string(),
            None => style(&header).bold().to_string(),
        };
        lines.push(header);

        if expanded {
            lines.extend(render_content(&section.content).into_iter().map(|l| {
                if l.is_empty() {
                    l
                } else {
                    format!("    {}", l)
                }
            }));
            lines.push(String::new());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_core::sections::SAJU_TABLE;

    fn section(id: &str, color: &str) -> FortuneSection {
        FortuneSection {
            id: id.to_string(),
            title: id.to_string(),
            icon: "🌟".to_string(),
            content: "- 첫째\n\n본문".to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#667eea"),
            Some(Color::Rgb {
                r: 0x66,
                g: 0x7e,
                b: 0xea
            })
        );
        assert_eq!(parse_hex_color("667eea"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_korean_date_time() {
        let afternoon = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(15, 5, 9)
            .unwrap();
        assert_eq!(korean_date_time(&afternoon), "2024. 5. 1. 오후 3:05:09");

        let midnight = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();
        assert_eq!(korean_date_time(&midnight), "2024. 12. 31. 오전 12:30:00");
    }

    #[test]
    fn test_unparseable_timestamp_shown_raw() {
        let response = FortuneResponse::new("", "어제 저녁");
        assert_eq!(format_timestamp(&response), "어제 저녁");
    }

    #[test]
    fn test_header_shows_icon_once() {
        let section = FortuneSection {
            id: "건강운".to_string(),
            title: "🍀 건강운".to_string(),
            icon: "🍀".to_string(),
            content: String::new(),
            color: "#43e97b".to_string(),
        };
        assert_eq!(section_header(&section, &SAJU_TABLE, false), "▶ 🍀 건강운");
        assert_eq!(section_header(&section, &SAJU_TABLE, true), "▼ 🍀 건강운");
    }

    #[test]
    fn test_render_plain_lines() {
        assert_eq!(
            render_content("- 첫째\n\n본문\n구분\t천간"),
            vec!["  • 첫째", "", "본문", "구분\t천간"]
        );
    }

    #[test]
    fn test_collapsed_sections_show_headers_only() {
        let sections = vec![section("종합운", "#667eea"), section("건강", "not-a-color")];
        let mut state = ExpansionState::new();

        let collapsed = render_sections(&sections, &SAJU_TABLE, &state);
        assert_eq!(collapsed.len(), 2);
        assert!(collapsed[0].contains("▶ 🌟 종합운"));

        state.set("건강", true);
        let expanded = render_sections(&sections, &SAJU_TABLE, &state);
        assert!(expanded[1].contains("▼ 🌟 건강"));
        assert!(expanded.contains(&"      • 첫째".to_string()));
        assert!(expanded.contains(&"    본문".to_string()));
    }
}
