use std::collections::HashMap;

use super::parser::FortuneSection;

/// Expanded/collapsed flags keyed by section id. Unknown ids are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: &str, expanded: bool) {
        self.expanded.insert(id.to_string(), expanded);
    }

    /// Flip one section; returns its new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let next = !self.is_expanded(id);
        self.set(id, next);
        next
    }

    pub fn all_expanded(&self, sections: &[FortuneSection]) -> bool {
        sections.iter().all(|section| self.is_expanded(&section.id))
    }

    /// Collapse everything if every section is open, otherwise open
    /// everything. Returns the state applied.
    pub fn toggle_all(&mut self, sections: &[FortuneSection]) -> bool {
        let next = !self.all_expanded(sections);
        self.expanded = sections
            .iter()
            .map(|section| (section.id.clone(), next))
            .collect();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> FortuneSection {
        FortuneSection {
            id: id.to_string(),
            title: id.to_string(),
            icon: "📋".to_string(),
            content: String::new(),
            color: "#74b9ff".to_string(),
        }
    }

    #[test]
    fn test_toggle_all_expands_when_partially_open() {
        let sections = vec![section("a"), section("b"), section("c")];
        let mut state = ExpansionState::new();
        state.set("a", true);
        state.set("b", true);

        assert!(!state.all_expanded(&sections));
        assert!(state.toggle_all(&sections));
        assert!(sections.iter().all(|s| state.is_expanded(&s.id)));

        assert!(!state.toggle_all(&sections));
        assert!(sections.iter().all(|s| !state.is_expanded(&s.id)));
    }

    #[test]
    fn test_toggle_single() {
        let mut state = ExpansionState::new();
        assert!(!state.is_expanded("x"));
        assert!(state.toggle("x"));
        assert!(state.is_expanded("x"));
        assert!(!state.toggle("x"));
    }

    #[test]
    fn test_duplicate_ids_share_state() {
        let sections = vec![section("조언"), section("조언")];
        let mut state = ExpansionState::new();
        state.toggle("조언");
        assert!(state.all_expanded(&sections));
    }

    #[test]
    fn test_empty_sections_count_as_all_expanded() {
        let mut state = ExpansionState::new();
        assert!(state.all_expanded(&[]));
        assert!(!state.toggle_all(&[]));
    }
}
