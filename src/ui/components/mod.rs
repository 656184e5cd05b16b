//! Reusable UI components

pub mod cells;
pub mod column_toggle_bar;
pub mod data_grid;
pub mod logs_panel;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod toolbar;

pub use column_toggle_bar::{ColumnChip, ColumnToggleBar};
pub use data_grid::DataGridComponent;
pub use logs_panel::LogsPanel;
pub use scrollbar_helper::ScrollbarHelper;
pub use status_bar::{StatusBar, StatusInfo};
pub use toolbar::GridToolbar;
