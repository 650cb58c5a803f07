//! Row expansion state. The report view owns an [`ExpandState`] and a
//! [`GlobalExpand`] mode; the table only derives the expanded keys from them
//! and asks for changes through [`ToggleExpand`] events.

use std::collections::{BTreeMap, BTreeSet};

use super::model::TestFileResult;

/// Request to move one row into `state` (true = expanded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleExpand {
    pub key: String,
    pub state: bool,
}

/// Toolbar-level mode. `All` expands every row unless it was collapsed by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlobalExpand {
    #[default]
    PerRow,
    All,
}

/// Per-row overrides keyed by test file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    rows: BTreeMap<String, bool>,
}

impl ExpandState {
    pub fn apply(&mut self, event: ToggleExpand) {
        tracing::debug!(key = %event.key, expanded = event.state, "toggle row");
        self.rows.insert(event.key, event.state);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    fn get(&self, key: &str) -> Option<bool> {
        self.rows.get(key).copied()
    }
}

/// Keys of the rows in `rows` that render expanded.
pub fn exist_keys(
    expand: &ExpandState,
    global: GlobalExpand,
    rows: &[TestFileResult],
) -> BTreeSet<String> {
    rows.iter()
        .map(|row| row.test_file_path.as_str())
        .filter(|key| match global {
            GlobalExpand::All => expand.get(key) != Some(false),
            GlobalExpand::PerRow => expand.get(key) == Some(true),
        })
        .map(str::to_string)
        .collect()
}

/// The single event a click on `key`'s expander produces.
pub fn toggle_event(expanded: &BTreeSet<String>, key: &str) -> ToggleExpand {
    ToggleExpand {
        key: key.to_string(),
        state: !expanded.contains(key),
    }
}
