//! Column registry: the host-supplied catalogue of displayable columns.

use super::rows::{CellValue, RowRecord};
use crate::constants::{ACTIONS_COLUMN_ID, ACTIONS_COLUMN_LABEL, ACTIONS_COLUMN_WIDTH_PX};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Tone of a badge cell, mapped to colours by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Warning,
    Negative,
    Neutral,
}

/// Framework-agnostic output of a cell renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    Text(String),
    /// Text drawn with emphasis (bold)
    Emphasis(String),
    Badge { text: String, tone: BadgeTone },
    /// Percentage bar, 0..=100
    Progress(u8),
    Empty,
}

impl DisplayValue {
    /// Plain-text rendition, used for width-agnostic consumers and tests
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(text) | Self::Emphasis(text) => text.clone(),
            Self::Badge { text, .. } => text.clone(),
            Self::Progress(percent) => format!("{percent}%"),
            Self::Empty => String::new(),
        }
    }
}

impl From<&CellValue> for DisplayValue {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Empty => Self::Empty,
            other => Self::Text(other.to_string()),
        }
    }
}

/// Custom cell renderer: receives the whole row and the raw cell value
pub type CellRenderer = Arc<dyn Fn(&RowRecord, &CellValue) -> DisplayValue + Send + Sync>;

/// Kind of column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Regular data column bound to a row field
    Data,
    /// Synthetic row-actions column: fixed last, not draggable, resizable or hideable
    Actions,
}

/// A displayable column. Immutable once registered.
#[derive(Clone)]
pub struct ColumnDefinition {
    pub id: String,
    pub label: String,
    pub default_width_px: u32,
    pub renderer: Option<CellRenderer>,
    pub kind: ColumnKind,
}

impl ColumnDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>, default_width_px: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default_width_px,
            renderer: None,
            kind: ColumnKind::Data,
        }
    }

    /// The synthetic actions column
    pub fn actions() -> Self {
        Self {
            id: ACTIONS_COLUMN_ID.to_string(),
            label: ACTIONS_COLUMN_LABEL.to_string(),
            default_width_px: ACTIONS_COLUMN_WIDTH_PX,
            renderer: None,
            kind: ColumnKind::Actions,
        }
    }

    #[must_use]
    pub fn with_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&RowRecord, &CellValue) -> DisplayValue + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn is_actions(&self) -> bool {
        self.kind == ColumnKind::Actions
    }

    /// Produce the display value for this column in `row`
    pub fn render_cell(&self, row: &RowRecord) -> DisplayValue {
        let value = row.get(&self.id);
        match &self.renderer {
            Some(renderer) => renderer(row, value),
            None => DisplayValue::from(value),
        }
    }
}

impl fmt::Debug for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDefinition")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("default_width_px", &self.default_width_px)
            .field("renderer", &self.renderer.as_ref().map(|_| "custom"))
            .field("kind", &self.kind)
            .finish()
    }
}

/// Ordered, immutable set of column definitions with unique ids.
///
/// Cloning is cheap; clones share the same definitions.
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    columns: Arc<[ColumnDefinition]>,
}

impl ColumnRegistry {
    /// Build a registry; later definitions reusing an id are dropped.
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(columns.len());
        for column in columns {
            if seen.insert(column.id.clone()) {
                unique.push(column);
            } else {
                log::warn!("Duplicate column id '{}' ignored", column.id);
            }
        }
        Self { columns: unique.into() }
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn get(&self, id: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Declared id order, with the actions column moved to the end.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .columns
            .iter()
            .filter(|column| !column.is_actions())
            .map(|column| column.id.clone())
            .collect();
        ids.extend(
            self.columns
                .iter()
                .filter(|column| column.is_actions())
                .map(|column| column.id.clone()),
        );
        ids
    }

    /// Whether `id` names a registered column that can be dragged and resized
    pub fn is_movable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|column| !column.is_actions())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
