//! Splitting readings into collapsible sections
//!
//! Readings from the fortune backend use a light markup: each topic starts
//! with a `## ` heading, bodies use `**bold**`, `- bullets` and occasional
//! tab-separated rows. [`SectionParser`] cuts a reading at its headings and
//! tags every section with an icon and color from an ordered keyword
//! [`SectionTable`]; [`format_content`] classifies body lines for display and
//! [`ExpansionState`] tracks which sections are open.

pub mod content;
pub mod expansion;
pub mod parser;
pub mod table;

pub use content::{emphasis_spans, format_content, format_line, ContentLine, Span};
pub use expansion::ExpansionState;
pub use parser::{section_id, FortuneSection, SectionParser, HEADING_MARKER};
pub use table::{SectionRule, SectionStyle, SectionTable, DAILY_TABLE, DEFAULT_STYLE, SAJU_TABLE};
