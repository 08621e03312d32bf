//! Keyword tables mapping section labels to an icon and a color.
//!
//! Matching is first-match-wins on substring containment, so the order of the
//! rules is their priority: a specific keyword ("건강운") has to sit above the
//! generic one it contains ("건강"). Reordering a table changes results.

use saju_types::FortuneType;

/// Emoji variation selector; trails some glyphs such as ❤️.
const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyle {
    pub icon: &'static str,
    /// Display color key (hex).
    pub color: &'static str,
}

/// Style for labels no rule matches.
pub const DEFAULT_STYLE: SectionStyle = SectionStyle {
    icon: "📋",
    color: "#74b9ff",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRule {
    pub keyword: &'static str,
    pub style: SectionStyle,
}

const fn rule(keyword: &'static str, icon: &'static str, color: &'static str) -> SectionRule {
    SectionRule {
        keyword,
        style: SectionStyle { icon, color },
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SectionTable {
    name: &'static str,
    rules: &'static [SectionRule],
}

pub static SAJU_TABLE: SectionTable = SectionTable {
    name: "saju",
    rules: &[
        rule("사주 기본 분석", "🔮", "#667eea"),
        rule("기본 분석", "🔮", "#667eea"),
        rule("성격", "🧠", "#f093fb"),
        rule("기질", "🧠", "#f093fb"),
        rule("건강운", "🍀", "#43e97b"),
        rule("건강", "🍀", "#43e97b"),
        rule("직업운", "💼", "#4facfe"),
        rule("재물운", "💰", "#ffeaa7"),
        rule("직업", "💼", "#4facfe"),
        rule("재물", "💰", "#ffeaa7"),
        rule("인간관계운", "👥", "#fa709a"),
        rule("인간관계", "👥", "#fa709a"),
        rule("연도별", "📅", "#fd79a8"),
        rule("운세", "📅", "#fd79a8"),
        rule("개운", "🌈", "#a29bfe"),
        rule("방법", "🌈", "#a29bfe"),
    ],
};

pub static DAILY_TABLE: SectionTable = SectionTable {
    name: "daily",
    rules: &[
        rule("종합운", "🌟", "#667eea"),
        rule("직업", "💼", "#f093fb"),
        rule("학업", "📚", "#f093fb"),
        rule("재물", "💰", "#4facfe"),
        rule("금전", "💰", "#4facfe"),
        rule("연애", "❤️", "#fa709a"),
        rule("인간관계", "👥", "#fa709a"),
        rule("건강", "🍀", "#43e97b"),
        rule("컨디션", "🍀", "#43e97b"),
        rule("행운", "🎯", "#ffeaa7"),
        rule("조언", "🌈", "#a29bfe"),
    ],
};

impl SectionTable {
    /// Table used for readings of `fortune_type`. Tarot has no table of its
    /// own and shares the saju one.
    pub fn for_fortune_type(fortune_type: FortuneType) -> &'static SectionTable {
        match fortune_type {
            FortuneType::Daily => &DAILY_TABLE,
            FortuneType::Saju | FortuneType::Tarot => &SAJU_TABLE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Style of the first rule whose keyword occurs in `label`.
    pub fn classify(&self, label: &str) -> SectionStyle {
        self.rules
            .iter()
            .find(|rule| label.contains(rule.keyword))
            .map(|rule| rule.style)
            .unwrap_or(DEFAULT_STYLE)
    }

    /// Remove this table's icon glyphs from a heading and trim it.
    pub fn strip_glyphs(&self, title: &str) -> String {
        title
            .chars()
            .filter(|c| *c != VARIATION_SELECTOR && !self.is_glyph(*c))
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn is_glyph(&self, c: char) -> bool {
        self.rules.iter().any(|rule| rule.style.icon.contains(c))
    }
}
