use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialoguer::{theme::ColorfulTheme, Select};
use saju_core::{ExpansionState, FortuneSection, SectionTable};
use saju_types::{FortuneResponse, FortuneType};
use std::io::{self, Write};

use crate::render::{format_timestamp, render_sections, result_title, section_header};

/// What the user picked from the section menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle(usize),
    ToggleAll,
    Retry,
    Quit,
}

/// Menu entries for the current state, paired with their actions.
pub fn menu_items(
    sections: &[FortuneSection],
    table: &SectionTable,
    state: &ExpansionState,
) -> Vec<(String, MenuAction)> {
    let mut items: Vec<(String, MenuAction)> = sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            (
                section_header(section, table, state.is_expanded(&section.id)),
                MenuAction::Toggle(i),
            )
        })
        .collect();

    let toggle_all_label = if state.all_expanded(sections) {
        "모두 접기"
    } else {
        "모두 펼치기"
    };
    items.push((toggle_all_label.to_string(), MenuAction::ToggleAll));
    items.push(("다시 보기".to_string(), MenuAction::Retry));
    items.push(("종료".to_string(), MenuAction::Quit));
    items
}

pub fn apply(action: MenuAction, sections: &[FortuneSection], state: &mut ExpansionState) {
    match action {
        MenuAction::Toggle(i) => {
            if let Some(section) = sections.get(i) {
                let expanded = state.toggle(&section.id);
                log::debug!("Section '{}' expanded={}", section.id, expanded);
            }
        }
        MenuAction::ToggleAll => {
            let expanded = state.toggle_all(sections);
            log::debug!("All sections expanded={}", expanded);
        }
        MenuAction::Retry | MenuAction::Quit => {}
    }
}

fn print_header(out: &mut impl Write, fortune_type: FortuneType, response: &FortuneResponse) -> io::Result<()> {
    writeln!(out, "{}", result_title(fortune_type))?;
    if !response.timestamp.trim().is_empty() {
        writeln!(out, "해석 생성 시간: {}", format_timestamp(response))?;
    }
    writeln!(out)
}

/// Print the whole reading with every section expanded.
pub fn print_expanded(
    fortune_type: FortuneType,
    table: &SectionTable,
    response: &FortuneResponse,
    sections: &[FortuneSection],
) -> Result<()> {
    let mut out = io::stdout().lock();
    print_header(&mut out, fortune_type, response)?;

    if sections.is_empty() {
        writeln!(out, "{}", response.result.trim())?;
        return Ok(());
    }

    let mut state = ExpansionState::new();
    state.toggle_all(sections);
    for line in render_sections(sections, table, &state) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Interactive expand/collapse loop. Returns `true` if the user asked to
/// request another reading.
pub fn browse(
    fortune_type: FortuneType,
    table: &SectionTable,
    response: &FortuneResponse,
    sections: &[FortuneSection],
) -> Result<bool> {
    if sections.is_empty() {
        print_expanded(fortune_type, table, response, sections)?;
        return Ok(false);
    }

    let mut state = ExpansionState::new();
    let mut cursor = 0;

    loop {
        let mut out = io::stdout();
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        print_header(&mut out, fortune_type, response)?;
        for line in render_sections(sections, table, &state) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;

        let items = menu_items(sections, table, &state);
        let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("펼치거나 접을 항목을 선택하세요")
            .items(&labels)
            .default(cursor.min(labels.len() - 1))
            .interact_opt()?;

        let action = match picked {
            Some(index) => {
                cursor = index;
                items[index].1
            }
            None => MenuAction::Quit,
        };

        match action {
            MenuAction::Quit => return Ok(false),
            MenuAction::Retry => return Ok(true),
            other => apply(other, sections, &mut state),
        }
    }
}
