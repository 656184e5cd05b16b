//! Constants used throughout the application
//!
//! This module centralizes persistence keys, UI text, and layout defaults
//! to improve maintainability and consistency.

// Persistence keys (the schema version suffix is appended at runtime)
pub const KEY_VISIBILITY: &str = "table_visibility";
pub const KEY_SIZING: &str = "table_sizing";
pub const KEY_ORDER: &str = "table_order";
/// Current layout schema version used as the persistence key suffix
pub const LAYOUT_SCHEMA_VERSION: &str = "v1";

// Synthetic columns
/// Identifier of the fixed, non-draggable actions column
pub const ACTIONS_COLUMN_ID: &str = "actions";
pub const ACTIONS_COLUMN_LABEL: &str = "Actions";
pub const ACTIONS_COLUMN_WIDTH_PX: u32 = 96;

// Layout defaults
/// Minimum column width in pixels; narrower widths are clamped
pub const MIN_COLUMN_WIDTH_PX: u32 = 40;
/// Maximum column width in pixels; wider widths are clamped
pub const MAX_COLUMN_WIDTH_PX: u32 = 2000;
/// Pointer travel in pixels before a header press turns into a drag
pub const DRAG_ACTIVATION_DISTANCE_PX: u32 = 8;
/// Pixels represented by one terminal cell
pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;
/// Upper bound accepted for cell_width_px in the config
pub const MAX_CELL_WIDTH_PX: u32 = 32;

// UI text
pub const TITLE_WORKSPACE: &str = "Workspace Directory";
pub const SUBTITLE_WORKSPACE: &str = "Manage team members and reorder columns by dragging headers.";
pub const LABEL_RESET_LAYOUT: &str = "Reset Layout";
pub const LABEL_TOGGLE_COLUMNS: &str = "Toggle Columns:";
pub const DEFAULT_GRID_TITLE: &str = "Records";
pub const EMPTY_TABLE_MESSAGE: &str = "No data available.";
pub const HINT_DRAG: &str = "Drag headers to reorder";
pub const HINT_RESIZE: &str = "Resize handles on column edges";
pub const HINT_KEYS: &str = "space: select • d: delete • g: grab • +/-: resize • R: reset • q: quit";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc' or 'L' to close";

// Log messages
pub const LOG_LAYOUT_RESET: &str = "Column layout reset to defaults";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

/// Build the persistence key for a layout slot at the given schema version.
#[must_use]
pub fn layout_key(slot: &str, version: &str) -> String {
    format!("{slot}_{version}")
}
