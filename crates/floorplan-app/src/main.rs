//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: floorplan-viewer <document.json> [output.svg]");
        std::process::exit(2);
    };
    let output = args
        .next()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| floorplan_app::native::default_output_path(&input));

    log::info!("Rendering {} to {}", input, output.display());
    let config = floorplan_app::ViewerConfig::default().with_document_url(input);
    if let Err(e) = floorplan_app::native::export_svg(&config, &output) {
        log::error!("{}", e);
        match e {
            floorplan_app::ViewerError::Load(_) => eprintln!("{}", floorplan_app::LOAD_FAILED_MESSAGE),
            other => eprintln!("{}", other),
        }
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
