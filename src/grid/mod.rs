//! Data grid core.
//!
//! Everything in here is plain state and pure transformations; the terminal
//! front end in [`crate::ui`] only feeds it input events and draws the
//! resulting [`view::GridView`].
//!
//! # Module Components
//!
//! - [`columns`] - Column registry and cell renderers
//! - [`rows`] - Row records and identifiers
//! - [`layout`] - Column order, sizing and visibility state machine
//! - [`drag`] - Drag-to-reorder gesture controller
//! - [`resize`] - Pointer resize gesture
//! - [`selection`] - Row selection and bulk actions
//! - [`view`] - Pure view model consumed by the renderer

pub mod columns;
pub mod drag;
pub mod layout;
pub mod resize;
pub mod rows;
pub mod selection;
pub mod view;

pub use columns::{BadgeTone, CellRenderer, ColumnDefinition, ColumnKind, ColumnRegistry, DisplayValue};
pub use drag::{
    ActiveDrag, ClosestCenter, CollisionStrategy, DragController, DragInput, DragOutcome, DragState, HeaderBounds, Point,
    ReorderIntent,
};
pub use layout::{ColumnLayout, LayoutKeys, LayoutOptions, OrderState, SizingState, VisibilityState};
pub use resize::ResizeGesture;
pub use rows::{CellValue, RowId, RowRecord};
pub use selection::{toolbar_mode, GridIntent, RowSelection, ToolbarMode};
pub use view::{build_view, GridView, HeaderView, RowView};
