//! Pointer-driven column resizing.

use super::layout::ColumnLayout;

/// An in-progress resize of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeGesture {
    pub id: String,
    start_x: u16,
    start_width_px: u32,
    px_per_cell: u32,
}

impl ResizeGesture {
    /// Start resizing `id` from pointer column `start_x`. Returns `None` for
    /// columns that cannot be resized.
    pub fn begin(layout: &ColumnLayout, id: &str, start_x: u16, px_per_cell: u32) -> Option<Self> {
        if !layout.registry().is_movable(id) {
            return None;
        }
        Some(Self {
            id: id.to_string(),
            start_x,
            start_width_px: layout.width_px(id),
            px_per_cell: px_per_cell.max(1),
        })
    }

    /// Width the column should take with the pointer at `x`
    pub fn width_at(&self, x: u16) -> u32 {
        let delta_cells = i64::from(x) - i64::from(self.start_x);
        let width = i64::from(self.start_width_px) + delta_cells * i64::from(self.px_per_cell);
        u32::try_from(width.max(0)).unwrap_or(u32::MAX)
    }

    /// Apply the pointer position to the layout (called on every move)
    pub fn update(&self, layout: &mut ColumnLayout, x: u16) -> bool {
        layout.set_sizing(&self.id, self.width_at(x))
    }
}
