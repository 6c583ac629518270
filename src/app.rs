use anyhow::Context as _;

use crate::cli::Cli;
use crate::config::config::*;
use crate::ui::slideshow::SlideshowApp;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SlideshowConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    log::debug!("{config:?}");

    let mut app = SlideshowApp::new(config.clone()).context("configuración del carrusel inválida")?;
    if let Some(path) = &cli.path {
        app.open(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(APP_NAME, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Error al iniciar la aplicación: {e}"))
}
