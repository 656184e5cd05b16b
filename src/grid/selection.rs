//! Row selection and bulk actions.
//!
//! [`RowSelection`] owns the grid's local copy of the rows together with the
//! set of selected ids, so deleting rows and dropping their ids from the
//! selection happen in one `&mut self` call and no reader can observe one
//! without the other.

use super::rows::{RowId, RowRecord};
use std::collections::{BTreeSet, HashSet};

/// What the toolbar above the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarMode {
    /// Title, description and the reset button
    Default,
    /// Bulk-action bar for `count` selected rows
    BulkActions { count: usize },
}

/// Intent forwarded to the host; the grid only mutates its own row copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridIntent {
    RowDelete(Vec<RowId>),
    BulkEdit(Vec<RowId>),
    RowEdit(RowId),
}

#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    rows: Vec<RowRecord>,
    selected: BTreeSet<RowId>,
}

impl RowSelection {
    pub fn new(rows: Vec<RowRecord>) -> Self {
        Self {
            rows,
            selected: BTreeSet::new(),
        }
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn selected(&self) -> &BTreeSet<RowId> {
        &self.selected
    }

    /// Selected ids in row order
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|row| self.selected.contains(&row.id))
            .map(|row| row.id.clone())
            .collect()
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains_row(&self, id: &RowId) -> bool {
        self.rows.iter().any(|row| &row.id == id)
    }

    /// Flip membership of `id`; ids of rows that are not present are ignored
    pub fn toggle_row(&mut self, id: &RowId) -> bool {
        if !self.contains_row(id) {
            log::debug!("Selection toggle ignored for missing row '{}'", id);
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
        true
    }

    pub fn select_all(&mut self) {
        self.selected = self.rows.iter().map(|row| row.id.clone()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Remove the matching rows and their selection entries together.
    /// Returns the ids that were actually removed, in row order.
    pub fn delete_rows(&mut self, ids: &[RowId]) -> Vec<RowId> {
        let doomed: HashSet<&RowId> = ids.iter().collect();
        let mut removed = Vec::new();
        self.rows.retain(|row| {
            if doomed.contains(&row.id) {
                removed.push(row.id.clone());
                false
            } else {
                true
            }
        });
        for id in ids {
            self.selected.remove(id);
        }
        if !removed.is_empty() {
            log::info!("Deleted {} row(s)", removed.len());
        }
        removed
    }

    /// Replace the rows wholesale (e.g. after a host refetch). Selection is
    /// pruned to ids that still exist.
    pub fn replace_rows(&mut self, rows: Vec<RowRecord>) {
        self.rows = rows;
        let present: HashSet<&RowId> = self.rows.iter().map(|row| &row.id).collect();
        self.selected.retain(|id| present.contains(id));
    }

    pub fn toolbar(&self) -> ToolbarMode {
        toolbar_mode(self.selected.len())
    }
}

/// Toolbar content as a pure function of the selection size
pub fn toolbar_mode(selected: usize) -> ToolbarMode {
    if selected > 0 {
        ToolbarMode::BulkActions { count: selected }
    } else {
        ToolbarMode::Default
    }
}
