//! The floorplan viewer component.
//!
//! Owns the loaded document, the view transform, hover state and the
//! interaction controller, plus the surface and overlay it draws on. Every
//! event is applied completely before the frame it triggers is rendered.

use crate::config::{ClickMode, ViewerConfig};
use crate::overlay::Overlay;
use floorplan_core::{
    FloorplanDocument, Furniture, InteractionController, ViewAction, ViewTransform, ViewerEvent,
    hit_test, hits, tooltip_anchor,
};
use floorplan_render::{RenderContext, SceneRenderer, Surface};
use kurbo::{Point, Size};

pub struct FloorplanViewer<S: Surface, O: Overlay> {
    document: FloorplanDocument,
    view: ViewTransform,
    /// Index of the hovered furniture item.
    hovered: Option<usize>,
    controller: InteractionController,
    renderer: SceneRenderer,
    click_mode: ClickMode,
    viewport: Size,
    surface: S,
    overlay: O,
}

impl<S: Surface, O: Overlay> FloorplanViewer<S, O> {
    /// Create a viewer. Nothing is drawn until [`FloorplanViewer::render`]
    /// or the first event.
    pub fn new(document: FloorplanDocument, surface: S, overlay: O, config: &ViewerConfig) -> Self {
        Self {
            document,
            view: ViewTransform::new(),
            hovered: None,
            controller: InteractionController::new(),
            renderer: SceneRenderer::new(config.style),
            click_mode: config.click_mode,
            viewport: config.viewport,
            surface,
            overlay,
        }
    }

    pub fn document(&self) -> &FloorplanDocument {
        &self.document
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn hovered(&self) -> Option<&Furniture> {
        self.hovered.and_then(|index| self.document.furniture(index))
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Feed one input event through the controller and apply the result.
    pub fn handle_event(&mut self, event: ViewerEvent) {
        if let Some(action) = self.controller.handle_event(event) {
            self.apply(action);
        }
    }

    /// Apply a view action, re-rendering if the picture changed.
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Pan(delta) => self.view.pan_by(delta),
            ViewAction::ZoomIn => self.view.zoom_in(),
            ViewAction::ZoomOut => self.view.zoom_out(),
            ViewAction::ZoomBy(delta) => self.view.zoom_by(delta),
            ViewAction::Reset => self.view.reset(),
            ViewAction::Resize(size) => self.viewport = size,
            ViewAction::Hover(position) => self.update_hover(position),
            ViewAction::Click(position) => self.click(position),
        }

        if action.needs_render() {
            self.render();
        }
    }

    /// Draw a full frame and re-show the tooltip for the hovered item.
    pub fn render(&mut self) {
        let ctx = RenderContext::new(&self.document, self.view, self.viewport);
        self.renderer.build_scene(&mut self.surface, &ctx);

        if let Some(furniture) = self.hovered.and_then(|index| self.document.furniture(index)) {
            let position = self.view.scene_to_screen(tooltip_anchor(furniture));
            self.overlay.show_tooltip(position, &furniture.label);
        }
    }

    /// Fit the view around the whole document.
    pub fn fit_to_content(&mut self, padding: f64) {
        if let Some(bounds) = self.document.bounds() {
            self.view.fit_to_bounds(bounds, self.viewport, padding);
        }
        self.render();
    }

    fn update_hover(&mut self, screen: Point) {
        let scene = self.view.screen_to_scene(screen);
        let hovered = hit_test(&self.document, scene);

        if hovered != self.hovered {
            log::debug!("Hover changed: {:?} -> {:?}", self.hovered, hovered);
        }
        self.hovered = hovered;

        match hovered.and_then(|index| self.document.furniture(index)) {
            Some(furniture) => {
                let position = self.view.scene_to_screen(tooltip_anchor(furniture));
                self.overlay.show_tooltip(position, &furniture.label);
            }
            None => self.overlay.hide_tooltip(),
        }
    }

    fn click(&mut self, screen: Point) {
        let scene = self.view.screen_to_scene(screen);
        let clicked: Vec<usize> = match self.click_mode {
            ClickMode::Topmost => hit_test(&self.document, scene).into_iter().collect(),
            ClickMode::EveryMatch => hits(&self.document, scene).collect(),
        };

        for index in clicked {
            if let Some(furniture) = self.document.furniture(index) {
                log::info!("Clicked furniture #{} '{}'", index, furniture.label);
                self.overlay.notify(&format!("Clicked on {}", furniture.label));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::{DragState, MAX_SCALE};
    use floorplan_render::RecordingSurface;
    use kurbo::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum OverlayCall {
        Show(Point, String),
        Hide,
        Notify(String),
    }

    #[derive(Debug, Default)]
    struct RecordingOverlay {
        calls: Vec<OverlayCall>,
    }

    impl Overlay for RecordingOverlay {
        fn show_tooltip(&mut self, position: Point, text: &str) {
            self.calls.push(OverlayCall::Show(position, text.to_string()));
        }

        fn hide_tooltip(&mut self) {
            self.calls.push(OverlayCall::Hide);
        }

        fn notify(&mut self, message: &str) {
            self.calls.push(OverlayCall::Notify(message.to_string()));
        }
    }

    const CHAIR_ROOM: &str = r#"{
        "Regions": [[{"X": 0, "Y": 0}, {"X": 10, "Y": 0}, {"X": 10, "Y": 10}, {"X": 0, "Y": 10}]],
        "Furnitures": [{
            "xPlacement": 5, "yPlacement": 5, "rotation": 0,
            "MinBound": {"X": -1, "Y": -1}, "MaxBound": {"X": 1, "Y": 1},
            "equipName": "Chair"
        }]
    }"#;

    const STACKED: &str = r#"{
        "Furnitures": [
            {"xPlacement": 0, "yPlacement": 0, "rotation": 0,
             "MinBound": {"X": 0, "Y": 0}, "MaxBound": {"X": 10, "Y": 10}, "equipName": "Table"},
            {"xPlacement": 5, "yPlacement": 5, "rotation": 0,
             "MinBound": {"X": -1, "Y": -1}, "MaxBound": {"X": 1, "Y": 1}, "equipName": "Lamp"}
        ]
    }"#;

    type TestViewer = FloorplanViewer<RecordingSurface, RecordingOverlay>;

    fn viewer(json: &str, config: ViewerConfig) -> TestViewer {
        let document = FloorplanDocument::from_json(json).unwrap();
        FloorplanViewer::new(document, RecordingSurface::new(), RecordingOverlay::default(), &config)
    }

    fn moved(x: f64, y: f64) -> ViewerEvent {
        ViewerEvent::PointerMove {
            position: Point::new(x, y),
        }
    }

    fn click(x: f64, y: f64) -> ViewerEvent {
        ViewerEvent::Click {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_hover_scenario() {
        let mut viewer = viewer(CHAIR_ROOM, ViewerConfig::default());

        viewer.handle_event(moved(5.0, 5.0));
        assert_eq!(viewer.hovered().map(|f| f.label.as_str()), Some("Chair"));
        assert_eq!(
            viewer.overlay().calls.last(),
            Some(&OverlayCall::Show(Point::new(4.0, -6.0), "Chair".to_string()))
        );

        viewer.handle_event(moved(100.0, 100.0));
        assert!(viewer.hovered().is_none());
        assert_eq!(viewer.overlay().calls.last(), Some(&OverlayCall::Hide));
    }

    #[test]
    fn test_hover_does_not_render() {
        let mut viewer = viewer(CHAIR_ROOM, ViewerConfig::default());
        viewer.handle_event(moved(5.0, 5.0));
        assert_eq!(viewer.surface().frames(), 0);
    }

    #[test]
    fn test_tooltip_position_follows_view() {
        let mut viewer = viewer(CHAIR_ROOM, ViewerConfig::default());
        viewer.apply(ViewAction::Pan(Vec2::new(100.0, 50.0)));
        viewer.apply(ViewAction::ZoomBy(-100.0)); // scale 2

        // Scene (5, 5) is at screen 5 * 2 + offset.
        viewer.handle_event(moved(110.0, 60.0));
        assert_eq!(viewer.hovered().map(|f| f.label.as_str()), Some("Chair"));
        // Anchor (4, -6) in scene space.
        assert_eq!(
            viewer.overlay().calls.last(),
            Some(&OverlayCall::Show(Point::new(108.0, 38.0), "Chair".to_string()))
        );
    }

    #[test]
    fn test_render_reshows_tooltip_while_hovering() {
        let mut viewer = viewer(CHAIR_ROOM, ViewerConfig::default());
        viewer.handle_event(moved(5.0, 5.0));
        let before = viewer.overlay().calls.len();

        viewer.handle_event(ViewerEvent::Resize {
            size: Size::new(300.0, 200.0),
        });
        assert_eq!(viewer.viewport(), Size::new(300.0, 200.0));
        assert_eq!(viewer.surface().size(), Size::new(300.0, 200.0));
        assert_eq!(viewer.surface().frames(), 1);
        assert_eq!(viewer.overlay().calls.len(), before + 1);
        assert!(matches!(viewer.overlay().calls.last(), Some(OverlayCall::Show(_, label)) if label == "Chair"));
    }

    #[test]
    fn test_render_without_hover_leaves_overlay_alone() {
        let mut viewer = viewer(CHAIR_ROOM, ViewerConfig::default());
        viewer.render();
        assert!(viewer.overlay().calls.is_empty());
        assert_eq!(viewer.surface().stroked_polygons().count(), 1);
        assert_eq!(viewer.surface().fill_rects().count(), 1);
    }

    #[test]
    fn test_drag_pans_and_renders() {
        let mut viewer = viewer(CHAIR_ROOM, ViewerConfig::default());
        viewer.handle_event(ViewerEvent::PointerDown {
            position: Point::new(10.0, 10.0),
        });
        viewer.handle_event(moved(30.0, 15.0));
        viewer.handle_event(moved(25.0, 40.0));

        assert_eq!(viewer.view().offset(), Vec2::new(15.0, 30.0));
        assert_eq!(viewer.surface().frames(), 2);
        // Dragging pans instead of hovering.
        assert!(viewer.overlay().calls.is_empty());

        viewer.handle_event(ViewerEvent::PointerUp {
            position: Point::new(25.0, 40.0),
        });
        assert_eq!(viewer.controller().drag_state(), DragState::Idle);
    }

    #[test]
    fn test_zoom_controls() {
        let mut viewer = viewer(CHAIR_ROOM, ViewerConfig::default());
        viewer.handle_event(ViewerEvent::ZoomIn);
        assert!((viewer.view().scale() - 1.1).abs() < 1e-12);
        viewer.handle_event(ViewerEvent::Wheel { delta_y: -1000.0 });
        assert!((viewer.view().scale() - MAX_SCALE).abs() < f64::EPSILON);
        viewer.handle_event(ViewerEvent::ZoomOut);
        assert!((viewer.view().scale() - MAX_SCALE / 1.1).abs() < 1e-12);

        viewer.handle_event(ViewerEvent::ResetZoom);
        assert_eq!(*viewer.view(), ViewTransform::new());
        assert_eq!(viewer.surface().frames(), 4);
    }

    #[test]
    fn test_click_topmost_notifies_once() {
        let mut viewer = viewer(STACKED, ViewerConfig::default());
        viewer.handle_event(click(5.0, 5.0));
        assert_eq!(
            viewer.overlay().calls,
            vec![OverlayCall::Notify("Clicked on Lamp".to_string())]
        );
    }

    #[test]
    fn test_click_every_match_notifies_each() {
        let config = ViewerConfig::default().with_click_mode(ClickMode::EveryMatch);
        let mut viewer = viewer(STACKED, config);
        viewer.handle_event(click(5.0, 5.0));
        assert_eq!(
            viewer.overlay().calls,
            vec![
                OverlayCall::Notify("Clicked on Table".to_string()),
                OverlayCall::Notify("Clicked on Lamp".to_string()),
            ]
        );
    }

    #[test]
    fn test_click_on_nothing() {
        let mut viewer = viewer(STACKED, ViewerConfig::default());
        viewer.handle_event(click(500.0, 500.0));
        assert!(viewer.overlay().calls.is_empty());
    }

    #[test]
    fn test_click_uses_view_transform() {
        let mut viewer = viewer(STACKED, ViewerConfig::default());
        viewer.apply(ViewAction::Pan(Vec2::new(-100.0, -100.0)));
        viewer.handle_event(click(5.0, 5.0));
        assert!(viewer.overlay().calls.is_empty());
        viewer.handle_event(click(-95.0, -95.0));
        assert_eq!(viewer.overlay().calls.len(), 1);
    }

    #[test]
    fn test_fit_to_content() {
        let config = ViewerConfig::default().with_viewport(Size::new(200.0, 200.0));
        let mut viewer = viewer(CHAIR_ROOM, config);
        viewer.fit_to_content(0.0);
        let center = viewer.view().scene_to_screen(Point::new(5.0, 5.0));
        assert!((center.x - 100.0).abs() < 1e-9);
        assert!((center.y - 100.0).abs() < 1e-9);
        assert_eq!(viewer.surface().frames(), 1);
    }
}
