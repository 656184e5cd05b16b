//! Drag-reorder controller.
//!
//! Turns pointer and keyboard gestures over column headers into a single
//! [`ReorderIntent`]. The controller never touches the layout itself: the
//! owner applies a committed intent through [`ColumnLayout::reorder`].
//! While a drag is in flight, [`DragController::preview_order`] yields a
//! speculative order for visual feedback only.
//!
//! [`ColumnLayout::reorder`]: super::layout::ColumnLayout::reorder

use super::layout::{array_move, OrderState};
use ratatui::layout::{Position, Rect};

/// A point with sub-cell precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        Self::new(f32::from(position.x), f32::from(position.y))
    }
}

/// Screen area occupied by one header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBounds {
    pub id: String,
    pub area: Rect,
    pub draggable: bool,
}

impl HeaderBounds {
    pub fn new(id: impl Into<String>, area: Rect, draggable: bool) -> Self {
        Self {
            id: id.into(),
            area,
            draggable,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            f32::from(self.area.x) + f32::from(self.area.width) / 2.0,
            f32::from(self.area.y) + f32::from(self.area.height) / 2.0,
        )
    }
}

/// Picks the header a dragged item is over
pub trait CollisionStrategy {
    /// `dragged` is the centre of the dragged header; `candidates` are the
    /// draggable headers. Must be deterministic.
    fn pick<'a>(&self, dragged: Point, candidates: &[&'a HeaderBounds]) -> Option<&'a HeaderBounds>;
}

/// Lowest centre-to-centre distance wins; ties go to the earlier candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestCenter;

impl CollisionStrategy for ClosestCenter {
    fn pick<'a>(&self, dragged: Point, candidates: &[&'a HeaderBounds]) -> Option<&'a HeaderBounds> {
        let mut best: Option<(&'a HeaderBounds, f32)> = None;
        for &candidate in candidates {
            let distance = dragged.distance(candidate.center());
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((candidate, distance)),
            }
        }
        best.map(|(header, _)| header)
    }
}

/// Request to move `moved` to the position of `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderIntent {
    pub moved: String,
    pub target: String,
}

/// How the active drag is being driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInput {
    Pointer,
    Keyboard,
}

/// A drag that passed activation
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub id: String,
    pub input: DragInput,
    /// Header currently under the dragged item, `None` outside the drop zone
    pub over: Option<String>,
    origin: Point,
    start_center: Point,
    pointer: Point,
}

impl ActiveDrag {
    /// Centre of the dragged header, following the pointer
    pub fn dragged_center(&self) -> Point {
        Point::new(
            self.start_center.x + (self.pointer.x - self.origin.x),
            self.start_center.y + (self.pointer.y - self.origin.y),
        )
    }

    /// Horizontal pointer displacement since the press
    pub fn offset_x(&self) -> f32 {
        self.pointer.x - self.origin.x
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer pressed on a header but not moved far enough yet
    Pending {
        id: String,
        origin: Point,
        start_center: Point,
    },
    Dragging(ActiveDrag),
}

/// Result of a terminating input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Apply this reorder to the layout
    Committed(ReorderIntent),
    /// The gesture ended without any change
    Cancelled,
    /// No drag was active
    Ignored,
}

pub struct DragController {
    state: DragState,
    activation_distance: f32,
    zone_margin: u16,
    strategy: Box<dyn CollisionStrategy + Send>,
}

impl DragController {
    /// `activation_distance` is in the same unit as pointer positions.
    pub fn new(activation_distance: f32) -> Self {
        Self::with_strategy(activation_distance, ClosestCenter)
    }

    pub fn with_strategy<S: CollisionStrategy + Send + 'static>(activation_distance: f32, strategy: S) -> Self {
        Self {
            state: DragState::Idle,
            activation_distance: activation_distance.max(0.0),
            zone_margin: 1,
            strategy: Box::new(strategy),
        }
    }

    /// Rows above and below the header row that still count as the drop zone
    #[must_use]
    pub fn with_zone_margin(mut self, margin: u16) -> Self {
        self.zone_margin = margin;
        self
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Active drag, once past the activation threshold
    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active().map(|drag| drag.id.as_str())
    }

    pub fn over_id(&self) -> Option<&str> {
        self.active().and_then(|drag| drag.over.as_deref())
    }

    /// Speculative order with the dragged column moved onto the hovered one
    pub fn preview_order(&self, order: &[String]) -> Option<OrderState> {
        let drag = self.active()?;
        let over = drag.over.as_deref()?;
        array_move(order, &drag.id, over)
    }

    /// Press on a header. Ignored while another gesture is in progress.
    pub fn pointer_down(&mut self, at: Position, headers: &[HeaderBounds]) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(header) = headers.iter().find(|h| h.draggable && h.area.contains(at)) else {
            return false;
        };
        self.state = DragState::Pending {
            id: header.id.clone(),
            origin: at.into(),
            start_center: header.center(),
        };
        true
    }

    /// Pointer moved; returns whether the hovered target or activation changed
    pub fn pointer_move(&mut self, at: Position, headers: &[HeaderBounds]) -> bool {
        let pointer: Point = at.into();
        match &mut self.state {
            DragState::Idle => false,
            DragState::Pending {
                id,
                origin,
                start_center,
            } => {
                if origin.distance(pointer) < self.activation_distance {
                    return false;
                }
                let mut drag = ActiveDrag {
                    id: std::mem::take(id),
                    input: DragInput::Pointer,
                    over: None,
                    origin: *origin,
                    start_center: *start_center,
                    pointer,
                };
                drag.over = self.hit_test(&drag, at, headers);
                log::debug!("Drag started on column '{}'", drag.id);
                self.state = DragState::Dragging(drag);
                true
            }
            DragState::Dragging(drag) if drag.input == DragInput::Pointer => {
                drag.pointer = pointer;
                let snapshot = drag.clone();
                let over = self.hit_test(&snapshot, at, headers);
                if let DragState::Dragging(drag) = &mut self.state {
                    let changed = drag.over != over;
                    drag.over = over;
                    return changed;
                }
                false
            }
            DragState::Dragging(_) => false,
        }
    }

    /// Pointer released: commits a pointer drag, or ends a click.
    pub fn pointer_up(&mut self, at: Position, headers: &[HeaderBounds]) -> DragOutcome {
        match &self.state {
            DragState::Idle => DragOutcome::Ignored,
            DragState::Pending { .. } => {
                self.state = DragState::Idle;
                DragOutcome::Cancelled
            }
            DragState::Dragging(drag) if drag.input == DragInput::Pointer => {
                self.pointer_move(at, headers);
                self.finish()
            }
            DragState::Dragging(_) => DragOutcome::Ignored,
        }
    }

    /// Keyboard grab of a column. Ignored while another gesture is in progress.
    pub fn grab(&mut self, id: &str, candidates: &[String]) -> bool {
        if !self.is_idle() || !candidates.iter().any(|c| c == id) {
            return false;
        }
        let center = Point::new(0.0, 0.0);
        self.state = DragState::Dragging(ActiveDrag {
            id: id.to_string(),
            input: DragInput::Keyboard,
            over: Some(id.to_string()),
            origin: center,
            start_center: center,
            pointer: center,
        });
        log::debug!("Keyboard grab of column '{}'", id);
        true
    }

    /// Move the keyboard drop target by `delta` positions among `candidates`
    /// (the draggable, visible ids in committed order).
    pub fn step(&mut self, delta: isize, candidates: &[String]) -> bool {
        let DragState::Dragging(drag) = &mut self.state else {
            return false;
        };
        if drag.input != DragInput::Keyboard || candidates.is_empty() {
            return false;
        }
        let current = drag
            .over
            .as_deref()
            .and_then(|over| candidates.iter().position(|c| c == over))
            .or_else(|| candidates.iter().position(|c| *c == drag.id))
            .unwrap_or(0);
        let last = candidates.len() - 1;
        let next = current.saturating_add_signed(delta).min(last);
        let target = candidates[next].clone();
        let changed = drag.over.as_deref() != Some(target.as_str());
        drag.over = Some(target);
        changed
    }

    /// Confirm key: commit the active drag
    pub fn confirm(&mut self) -> DragOutcome {
        if self.is_idle() {
            return DragOutcome::Ignored;
        }
        self.finish()
    }

    /// Escape key: abandon the gesture without side effects
    pub fn cancel(&mut self) -> DragOutcome {
        if self.is_idle() {
            return DragOutcome::Ignored;
        }
        log::debug!("Drag cancelled");
        self.state = DragState::Idle;
        DragOutcome::Cancelled
    }

    fn finish(&mut self) -> DragOutcome {
        let state = std::mem::take(&mut self.state);
        let DragState::Dragging(drag) = state else {
            return DragOutcome::Cancelled;
        };
        match drag.over {
            Some(target) if target != drag.id => {
                log::debug!("Drag committed: '{}' onto '{}'", drag.id, target);
                DragOutcome::Committed(ReorderIntent {
                    moved: drag.id,
                    target,
                })
            }
            _ => DragOutcome::Cancelled,
        }
    }

    fn hit_test(&self, drag: &ActiveDrag, at: Position, headers: &[HeaderBounds]) -> Option<String> {
        let candidates: Vec<&HeaderBounds> = headers.iter().filter(|h| h.draggable).collect();
        let zone = drop_zone(&candidates, self.zone_margin)?;
        if !zone.contains(at) {
            return None;
        }
        self.strategy
            .pick(drag.dragged_center(), &candidates)
            .map(|header| header.id.clone())
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Bounding box of the candidates, grown vertically by `margin` rows
fn drop_zone(candidates: &[&HeaderBounds], margin: u16) -> Option<Rect> {
    let first = candidates.first()?;
    let zone = candidates.iter().skip(1).fold(first.area, |acc, h| acc.union(h.area));
    let y = zone.y.saturating_sub(margin);
    let height = zone.height.saturating_add(zone.y - y).saturating_add(margin);
    Some(Rect::new(zone.x, y, zone.width, height))
}
