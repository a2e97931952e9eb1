//! Headless native shell: render a floorplan document to an SVG file.

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::overlay::LogOverlay;
use crate::viewer::FloorplanViewer;
use floorplan_core::DocumentLoader;
use floorplan_core::loader::FileLoader;
use floorplan_render::SvgSurface;
use std::path::{Path, PathBuf};

/// Margin kept around the floorplan when fitting it into the image.
pub const EXPORT_PADDING: f64 = 20.0;

/// Default output path: the input with an `.svg` extension.
pub fn default_output_path(input: &str) -> PathBuf {
    Path::new(input).with_extension("svg")
}

/// Load the configured document from disk and write one rendered frame as SVG.
pub fn export_svg(config: &ViewerConfig, output: &Path) -> Result<(), ViewerError> {
    let loader = FileLoader::current_dir();
    let document = pollster::block_on(loader.load(&config.document_url))?;

    let surface = SvgSurface::new(config.viewport);
    let mut viewer = FloorplanViewer::new(document, surface, LogOverlay, config);
    viewer.fit_to_content(EXPORT_PADDING);

    std::fs::write(output, viewer.surface().finish())
        .map_err(|e| ViewerError::Io(format!("Failed to write {}: {}", output.display(), e)))?;
    log::info!("Wrote {}", output.display());
    Ok(())
}
