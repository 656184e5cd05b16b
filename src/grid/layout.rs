//! Column layout state machine.
//!
//! [`ColumnLayout`] owns the three pieces of layout state (visibility, sizing
//! and order), keeps them consistent with the [`ColumnRegistry`], and writes
//! every new snapshot back to the [`PreferenceStore`].
//!
//! Invariants maintained at every mutation boundary:
//! - `order` holds every registry id exactly once and nothing else.
//! - the actions column, when registered, is the last entry of `order`.
//! - stored widths are never below the minimum width.
//! - visibility and sizing only mention registered, movable columns.

use super::columns::{ColumnDefinition, ColumnRegistry};
use crate::constants::{
    layout_key, KEY_ORDER, KEY_SIZING, KEY_VISIBILITY, LAYOUT_SCHEMA_VERSION, MAX_COLUMN_WIDTH_PX, MIN_COLUMN_WIDTH_PX,
};
use crate::preferences::PreferenceStore;
use std::collections::{BTreeMap, HashSet};

/// Column id -> shown. Absent ids are visible.
pub type VisibilityState = BTreeMap<String, bool>;
/// Column id -> width in pixels. Absent ids use the default width.
pub type SizingState = BTreeMap<String, u32>;
/// Column ids in display order.
pub type OrderState = Vec<String>;

/// Tunables for a [`ColumnLayout`]
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub min_width_px: u32,
    pub schema_version: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_width_px: MIN_COLUMN_WIDTH_PX,
            schema_version: LAYOUT_SCHEMA_VERSION.to_string(),
        }
    }
}

/// Persistence keys of the three layout slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutKeys {
    pub visibility: String,
    pub sizing: String,
    pub order: String,
}

impl LayoutKeys {
    pub fn for_version(version: &str) -> Self {
        Self {
            visibility: layout_key(KEY_VISIBILITY, version),
            sizing: layout_key(KEY_SIZING, version),
            order: layout_key(KEY_ORDER, version),
        }
    }
}

/// Move `moved` to the index `target` currently occupies.
///
/// Moving right lands the column after the target, moving left lands it
/// before. Returns `None` when the move is a no-op or either id is missing.
pub fn array_move(order: &[String], moved: &str, target: &str) -> Option<OrderState> {
    if moved == target {
        return None;
    }
    let from = order.iter().position(|id| id == moved)?;
    let to = order.iter().position(|id| id == target)?;

    let mut next = order.to_vec();
    let id = next.remove(from);
    next.insert(to, id);
    Some(next)
}

pub struct ColumnLayout {
    registry: ColumnRegistry,
    store: PreferenceStore,
    keys: LayoutKeys,
    min_width_px: u32,
    visibility: VisibilityState,
    sizing: SizingState,
    order: OrderState,
}

impl ColumnLayout {
    /// Load the layout for `registry` from `store`, repairing whatever the
    /// persisted state got wrong.
    pub fn load(registry: ColumnRegistry, store: PreferenceStore, options: LayoutOptions) -> Self {
        let keys = LayoutKeys::for_version(&options.schema_version);
        let visibility = store.load(&keys.visibility, VisibilityState::new());
        let sizing = store.load(&keys.sizing, SizingState::new());
        let order = store.load(&keys.order, registry.ids());

        let mut layout = Self {
            registry,
            store,
            keys,
            min_width_px: options.min_width_px.max(1),
            visibility,
            sizing,
            order,
        };

        if layout.normalize() {
            log::debug!("Persisted column layout repaired against the registry");
            layout.persist_all();
        }
        log::info!("Column layout loaded: {}", layout.order.join(", "));
        layout
    }

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    pub fn keys(&self) -> &LayoutKeys {
        &self.keys
    }

    pub fn min_width_px(&self) -> u32 {
        self.min_width_px
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn sizing(&self) -> &SizingState {
        &self.sizing
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visibility.get(id).copied().unwrap_or(true)
    }

    /// Effective width used for rendering, never below the minimum
    pub fn width_px(&self, id: &str) -> u32 {
        let default = self.registry.get(id).map_or(self.min_width_px, |column| column.default_width_px);
        self.clamp_width(self.sizing.get(id).copied().unwrap_or(default))
    }

    /// Visible columns in display order
    pub fn visible_columns(&self) -> Vec<&ColumnDefinition> {
        self.columns_in(&self.order)
    }

    /// Visible columns following an arbitrary (e.g. preview) order
    pub fn columns_in<'a>(&'a self, order: &[String]) -> Vec<&'a ColumnDefinition> {
        order
            .iter()
            .filter(|id| self.is_visible(id))
            .filter_map(|id| self.registry.get(id))
            .collect()
    }

    pub fn total_width_px(&self) -> u32 {
        self.visible_columns()
            .iter()
            .map(|column| self.width_px(&column.id))
            .fold(0u32, u32::saturating_add)
    }

    fn clamp_width(&self, width_px: u32) -> u32 {
        width_px.clamp(self.min_width_px, MAX_COLUMN_WIDTH_PX.max(self.min_width_px))
    }

    /// Show or hide a column. Hidden columns keep their place in the order.
    pub fn set_visibility(&mut self, id: &str, visible: bool) -> bool {
        if !self.registry.is_movable(id) {
            log::debug!("Visibility change ignored for column '{}'", id);
            return false;
        }
        if self.visibility.get(id) == Some(&visible) {
            return false;
        }
        self.visibility.insert(id.to_string(), visible);
        self.store.save(&self.keys.visibility, &self.visibility);
        true
    }

    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        let visible = self.is_visible(id);
        self.set_visibility(id, !visible)
    }

    /// Set a column width, clamped to the allowed range. Safe to call on every
    /// pointer move; unchanged widths skip the store write.
    pub fn set_sizing(&mut self, id: &str, width_px: u32) -> bool {
        if !self.registry.is_movable(id) {
            return false;
        }
        let width = self.clamp_width(width_px);
        if self.sizing.get(id) == Some(&width) {
            return false;
        }
        self.sizing.insert(id.to_string(), width);
        self.store.save(&self.keys.sizing, &self.sizing);
        true
    }

    /// Grow or shrink a column relative to its current width
    pub fn resize_by(&mut self, id: &str, delta_px: i64) -> bool {
        let current = i64::from(self.width_px(id));
        let next = current.saturating_add(delta_px).clamp(0, i64::from(u32::MAX));
        self.set_sizing(id, u32::try_from(next).unwrap_or(u32::MAX))
    }

    /// Move `moved` to where `target` sits. Ignored for equal or unknown ids
    /// and for the actions column.
    pub fn reorder(&mut self, moved: &str, target: &str) -> bool {
        if !self.registry.is_movable(moved) || !self.registry.is_movable(target) {
            return false;
        }
        let Some(next) = array_move(&self.order, moved, target) else {
            return false;
        };
        log::debug!("Column '{}' moved onto '{}'", moved, target);
        self.order = next;
        self.store.save(&self.keys.order, &self.order);
        true
    }

    /// Restore registry defaults for all three states
    pub fn reset(&mut self) {
        self.visibility.clear();
        self.sizing.clear();
        self.order = self.registry.ids();
        self.persist_all();
    }

    /// Adopt a new registry, dropping stale ids and appending new ones
    pub fn reconcile(&mut self, registry: ColumnRegistry) -> bool {
        self.registry = registry;
        let changed = self.normalize();
        if changed {
            self.persist_all();
        }
        changed
    }

    fn normalize(&mut self) -> bool {
        let registry = &self.registry;
        let max_width = MAX_COLUMN_WIDTH_PX.max(self.min_width_px);
        let min_width = self.min_width_px;

        let visibility_len = self.visibility.len();
        self.visibility.retain(|id, _| registry.is_movable(id));
        let mut changed = self.visibility.len() != visibility_len;

        let sizing_len = self.sizing.len();
        self.sizing.retain(|id, _| registry.is_movable(id));
        changed |= self.sizing.len() != sizing_len;
        for width in self.sizing.values_mut() {
            let clamped = (*width).clamp(min_width, max_width);
            if *width != clamped {
                *width = clamped;
                changed = true;
            }
        }

        let mut seen = HashSet::new();
        let mut order: OrderState = self
            .order
            .iter()
            .filter(|id| registry.is_movable(id))
            .filter(|id| seen.insert(id.to_string()))
            .cloned()
            .collect();
        for id in registry.ids() {
            if !seen.contains(&id) && registry.is_movable(&id) {
                seen.insert(id.clone());
                order.push(id);
            }
        }
        order.extend(
            registry
                .columns()
                .iter()
                .filter(|column| column.is_actions())
                .map(|column| column.id.clone()),
        );

        if order != self.order {
            self.order = order;
            changed = true;
        }
        changed
    }

    fn persist_all(&self) {
        self.store.save(&self.keys.visibility, &self.visibility);
        self.store.save(&self.keys.sizing, &self.sizing);
        self.store.save(&self.keys.order, &self.order);
    }
}

impl std::fmt::Debug for ColumnLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnLayout")
            .field("min_width_px", &self.min_width_px)
            .field("visibility", &self.visibility)
            .field("sizing", &self.sizing)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
