use crate::grid::{ReorderIntent, RowId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Column layout
    ToggleColumn(String),
    ResizeColumn { id: String, delta_px: i64 },
    ReorderColumns(ReorderIntent),
    ResetLayout,

    // Row selection
    ToggleRow(RowId),
    ToggleAllRows,
    ClearSelection,

    // Row operations
    DeleteRows(Vec<RowId>),
    DeleteSelected,
    EditRow(RowId),
    EditSelected,

    // UI operations
    ShowLogs(bool),
    CycleIcons,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
