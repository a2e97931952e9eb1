//! Tooltip and notification overlay.

use kurbo::Point;

/// Shown to the user when the document cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load floorplan data. Please try again later.";

/// UI layered over the drawing surface: a tooltip and blocking notifications.
pub trait Overlay {
    /// Show the tooltip with its top-left corner at a screen position.
    fn show_tooltip(&mut self, position: Point, text: &str);

    fn hide_tooltip(&mut self);

    /// Show a blocking notification.
    fn notify(&mut self, message: &str);
}

/// Overlay for headless use: everything goes to the log.
#[derive(Debug, Default)]
pub struct LogOverlay;

impl Overlay for LogOverlay {
    fn show_tooltip(&mut self, position: Point, text: &str) {
        log::debug!("Tooltip '{}' at ({:.1}, {:.1})", text, position.x, position.y);
    }

    fn hide_tooltip(&mut self) {
        log::debug!("Tooltip hidden");
    }

    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
    }
}
