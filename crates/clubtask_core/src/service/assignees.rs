//! Assignee multi-select state.
//!
//! # Invariants
//! - The selection is a set of display names; duplicates are impossible.
//! - `toggle` flips membership; two toggles of the same name cancel out.
//! - Filtering never reorders options within a kind and lists teams first.

use crate::model::assignee::{AssigneeKind, AssigneeOption};
use std::collections::BTreeSet;

/// Selected assignees plus the picker's search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssigneeSet {
    selected: BTreeSet<String>,
    search_term: String,
}

impl AssigneeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` when absent, removes it when present.
    ///
    /// Returns whether `name` is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.selected.remove(name) {
            false
        } else {
            self.selected.insert(name.to_string());
            true
        }
    }

    /// Drops `name` if selected. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.selected.remove(name)
    }

    /// Empties the selection and the search term.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.search_term.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.selected.iter().map(String::as_str)
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Options matching the current search term.
    pub fn visible_options<'a>(&self, options: &'a [AssigneeOption]) -> FilteredOptions<'a> {
        filter_options(options, &self.search_term)
    }
}

/// Case-insensitive substring filter over assignee options.
///
/// The returned iterator is lazy and `Clone`, so callers can restart it.
pub fn filter_options<'a>(
    options: &'a [AssigneeOption],
    search_term: &str,
) -> FilteredOptions<'a> {
    FilteredOptions {
        options,
        needle: search_term.to_lowercase(),
        phase: Some(AssigneeKind::Team),
        cursor: 0,
    }
}

/// Iterator returned by `filter_options`: team matches, then member matches.
#[derive(Debug, Clone)]
pub struct FilteredOptions<'a> {
    options: &'a [AssigneeOption],
    needle: String,
    phase: Option<AssigneeKind>,
    cursor: usize,
}

impl<'a> Iterator for FilteredOptions<'a> {
    type Item = &'a AssigneeOption;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let phase = self.phase?;
            while let Some(option) = self.options.get(self.cursor) {
                self.cursor += 1;
                if option.kind == phase && option.matches_lowercase(&self.needle) {
                    return Some(option);
                }
            }

            self.phase = match phase {
                AssigneeKind::Team => Some(AssigneeKind::Member),
                AssigneeKind::Member => None,
            };
            self.cursor = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, kind: AssigneeKind) -> AssigneeOption {
        AssigneeOption {
            id: name.to_lowercase(),
            name: name.to_string(),
            kind,
        }
    }

    fn options() -> Vec<AssigneeOption> {
        vec![
            option("Alice", AssigneeKind::Member),
            option("Tech", AssigneeKind::Team),
            option("Techie Tom", AssigneeKind::Member),
            option("Design", AssigneeKind::Team),
        ]
    }

    #[test]
    fn toggle_twice_cancels_out() {
        let mut set = AssigneeSet::new();
        assert!(set.toggle("Alice"));
        assert!(set.contains("Alice"));
        assert!(!set.toggle("Alice"));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_is_silent_for_absent_names() {
        let mut set = AssigneeSet::new();
        set.toggle("Tech");
        assert!(!set.remove("Design"));
        assert!(set.remove("Tech"));
        assert!(set.is_empty());
    }

    #[test]
    fn clear_drops_selection_and_search_term() {
        let mut set = AssigneeSet::new();
        set.toggle("Tech");
        set.set_search_term("te");
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.search_term(), "");
    }

    #[test]
    fn filter_groups_teams_before_members() {
        let options = options();
        let names: Vec<_> = filter_options(&options, "")
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, ["Tech", "Design", "Alice", "Techie Tom"]);
    }

    #[test]
    fn filter_is_case_insensitive_and_restartable() {
        let options = options();
        let matches = filter_options(&options, "TECH");
        let first: Vec<_> = matches.clone().map(|o| o.name.as_str()).collect();
        let second: Vec<_> = matches.map(|o| o.name.as_str()).collect();
        assert_eq!(first, ["Tech", "Techie Tom"]);
        assert_eq!(first, second);
    }

    #[test]
    fn filter_without_match_is_empty() {
        let options = options();
        assert_eq!(filter_options(&options, "zzz").count(), 0);
    }
}
