//! Interaction state machine: raw viewer events in, view actions out.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Input events the viewer reacts to.
///
/// Pointer positions are in screen coordinates relative to the drawing
/// surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewerEvent {
    PointerDown { position: Point },
    /// Pointer released, anywhere on the page.
    PointerUp { position: Point },
    PointerMove { position: Point },
    Click { position: Point },
    /// Vertical wheel delta, as reported by the platform.
    Wheel { delta_y: f64 },
    /// The viewport changed size.
    Resize { size: Size },
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// What the viewer should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    /// Pan the view by a screen-space delta.
    Pan(Vec2),
    ZoomIn,
    ZoomOut,
    /// Wheel zoom with the raw delta.
    ZoomBy(f64),
    Reset,
    /// Hit-test for hover at a screen position.
    Hover(Point),
    /// Hit-test for a click at a screen position.
    Click(Point),
    /// Re-render at a new viewport size.
    Resize(Size),
}

impl ViewAction {
    /// Whether applying this action changes the picture and needs a render pass.
    pub fn needs_render(&self) -> bool {
        !matches!(self, ViewAction::Hover(_) | ViewAction::Click(_))
    }
}

/// Drag state of the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging; `anchor` is the last position a pan was computed from.
    Dragging { anchor: Point },
}

/// Maps viewer events to view actions, tracking drag state in between.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    drag: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Process one event.
    pub fn handle_event(&mut self, event: ViewerEvent) -> Option<ViewAction> {
        match event {
            ViewerEvent::PointerDown { position } => {
                self.drag = DragState::Dragging { anchor: position };
                None
            }
            ViewerEvent::PointerUp { .. } => {
                self.drag = DragState::Idle;
                None
            }
            ViewerEvent::PointerMove { position } => match self.drag {
                DragState::Dragging { anchor } => {
                    // Incremental: delta since the previous move, not since drag start.
                    self.drag = DragState::Dragging { anchor: position };
                    Some(ViewAction::Pan(position - anchor))
                }
                DragState::Idle => Some(ViewAction::Hover(position)),
            },
            ViewerEvent::Click { position } => Some(ViewAction::Click(position)),
            ViewerEvent::Wheel { delta_y } => Some(ViewAction::ZoomBy(delta_y)),
            ViewerEvent::Resize { size } => Some(ViewAction::Resize(size)),
            ViewerEvent::ZoomIn => Some(ViewAction::ZoomIn),
            ViewerEvent::ZoomOut => Some(ViewAction::ZoomOut),
            ViewerEvent::ResetZoom => Some(ViewAction::Reset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f64, y: f64) -> ViewerEvent {
        ViewerEvent::PointerDown {
            position: Point::new(x, y),
        }
    }

    fn moved(x: f64, y: f64) -> ViewerEvent {
        ViewerEvent::PointerMove {
            position: Point::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> ViewerEvent {
        ViewerEvent::PointerUp {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_idle_move_hovers() {
        let mut controller = InteractionController::new();
        assert_eq!(
            controller.handle_event(moved(3.0, 4.0)),
            Some(ViewAction::Hover(Point::new(3.0, 4.0)))
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drag_pans_incrementally() {
        let mut controller = InteractionController::new();
        assert_eq!(controller.handle_event(down(100.0, 100.0)), None);
        assert_eq!(
            controller.drag_state(),
            DragState::Dragging {
                anchor: Point::new(100.0, 100.0)
            }
        );

        assert_eq!(
            controller.handle_event(moved(150.0, 120.0)),
            Some(ViewAction::Pan(Vec2::new(50.0, 20.0)))
        );
        // Second move is relative to the first, not to the press.
        assert_eq!(
            controller.handle_event(moved(140.0, 125.0)),
            Some(ViewAction::Pan(Vec2::new(-10.0, 5.0)))
        );
    }

    #[test]
    fn test_release_ends_drag() {
        let mut controller = InteractionController::new();
        controller.handle_event(down(0.0, 0.0));
        controller.handle_event(up(500.0, 500.0));
        assert_eq!(controller.drag_state(), DragState::Idle);
        assert_eq!(
            controller.handle_event(moved(10.0, 10.0)),
            Some(ViewAction::Hover(Point::new(10.0, 10.0)))
        );
    }

    #[test]
    fn test_release_while_idle_is_harmless() {
        let mut controller = InteractionController::new();
        assert_eq!(controller.handle_event(up(1.0, 1.0)), None);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_wheel_and_buttons_ignore_drag_state() {
        let mut controller = InteractionController::new();
        controller.handle_event(down(0.0, 0.0));

        assert_eq!(
            controller.handle_event(ViewerEvent::Wheel { delta_y: -100.0 }),
            Some(ViewAction::ZoomBy(-100.0))
        );
        assert_eq!(controller.handle_event(ViewerEvent::ZoomIn), Some(ViewAction::ZoomIn));
        assert_eq!(controller.handle_event(ViewerEvent::ZoomOut), Some(ViewAction::ZoomOut));
        assert_eq!(controller.handle_event(ViewerEvent::ResetZoom), Some(ViewAction::Reset));
        assert_eq!(
            controller.handle_event(ViewerEvent::Resize {
                size: Size::new(800.0, 600.0)
            }),
            Some(ViewAction::Resize(Size::new(800.0, 600.0)))
        );
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_needs_render() {
        assert!(ViewAction::Pan(Vec2::ZERO).needs_render());
        assert!(ViewAction::ZoomBy(1.0).needs_render());
        assert!(ViewAction::Resize(Size::ZERO).needs_render());
        assert!(!ViewAction::Hover(Point::ZERO).needs_render());
        assert!(!ViewAction::Click(Point::ZERO).needs_render());
    }
}
