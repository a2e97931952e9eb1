//! Viewer configuration.

use floorplan_render::RenderStyle;
use kurbo::Size;

/// Document fetched when nothing else is configured.
pub const DEFAULT_DOCUMENT_URL: &str = "sample.json";

/// Query/hash parameter that overrides the document URL on the web.
pub const PLAN_PARAM: &str = "plan";

/// Which furniture items a click reports when several boxes overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickMode {
    /// Report only the item hover would pick (the last listed one).
    #[default]
    Topmost,
    /// Report every overlapping item, in document order.
    EveryMatch,
}

/// Element ids the web shell looks up at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomIds {
    pub canvas: String,
    pub tooltip: String,
    pub zoom_in: String,
    pub zoom_out: String,
    /// Container the "Reset Zoom" button is appended to.
    pub controls: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            canvas: "floorplan".to_string(),
            tooltip: "tooltip".to_string(),
            zoom_in: "zoom-in".to_string(),
            zoom_out: "zoom-out".to_string(),
            controls: "controls".to_string(),
        }
    }
}

/// Viewer configuration.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub document_url: String,
    pub click_mode: ClickMode,
    pub style: RenderStyle,
    /// Initial viewport size. The web shell replaces it with the window size.
    pub viewport: Size,
    pub dom: DomIds,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
            click_mode: ClickMode::default(),
            style: RenderStyle::default(),
            viewport: Size::new(1280.0, 800.0),
            dom: DomIds::default(),
        }
    }
}

impl ViewerConfig {
    pub fn with_document_url(mut self, url: impl Into<String>) -> Self {
        self.document_url = url.into();
        self
    }

    pub fn with_click_mode(mut self, mode: ClickMode) -> Self {
        self.click_mode = mode;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Extract the [`PLAN_PARAM`] value from a query string or hash fragment.
/// Supports formats like `?plan=floor2.json&debug=1` and `#plan=floor2.json`.
pub fn plan_from_params(s: &str) -> Option<String> {
    let s = s.trim_start_matches(['?', '#']);

    s.split('&').find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(PLAN_PARAM), Some(value)) if !value.is_empty() => Some(value.to_string()),
            _ => None,
        }
    })
}
