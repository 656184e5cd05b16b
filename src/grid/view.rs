//! Pure view model of the grid.
//!
//! [`build_view`] flattens the layout, the rows and the selection into what
//! should be on screen. It performs no I/O and holds no state, so the
//! terminal layer only has to draw the result.

use super::columns::{ColumnKind, DisplayValue};
use super::layout::ColumnLayout;
use super::rows::RowId;
use super::selection::{RowSelection, ToolbarMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub id: String,
    pub label: String,
    pub width_px: u32,
    pub kind: ColumnKind,
}

impl HeaderView {
    pub fn draggable(&self) -> bool {
        self.kind == ColumnKind::Data
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RowId,
    pub selected: bool,
    /// One entry per visible header, in header order
    pub cells: Vec<DisplayValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    pub toolbar: ToolbarMode,
    pub total_width_px: u32,
}

impl GridView {
    pub fn header_ids(&self) -> Vec<&str> {
        self.headers.iter().map(|header| header.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the view. `preview_order`, when given, replaces the committed order
/// (used while a drag is in flight).
pub fn build_view(layout: &ColumnLayout, selection: &RowSelection, preview_order: Option<&[String]>) -> GridView {
    let columns = layout.columns_in(preview_order.unwrap_or(layout.order()));

    let headers: Vec<HeaderView> = columns
        .iter()
        .map(|column| HeaderView {
            id: column.id.clone(),
            label: column.label.clone(),
            width_px: layout.width_px(&column.id),
            kind: column.kind,
        })
        .collect();

    let rows = selection
        .rows()
        .iter()
        .map(|row| RowView {
            id: row.id.clone(),
            selected: selection.is_selected(&row.id),
            cells: columns
                .iter()
                .map(|column| match column.kind {
                    ColumnKind::Data => column.render_cell(row),
                    ColumnKind::Actions => DisplayValue::Empty,
                })
                .collect(),
        })
        .collect();

    let total_width_px = headers
        .iter()
        .map(|header| header.width_px)
        .fold(0u32, u32::saturating_add);

    GridView {
        headers,
        rows,
        toolbar: selection.toolbar(),
        total_width_px,
    }
}
