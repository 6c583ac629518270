use std::path::{Path, PathBuf};
use std::time::Duration;

use egui::{Color32, Rect, TextureHandle, Vec2};
use rfd::FileDialog;

use crate::config::config::*;
use crate::core::carousel::{CarouselController, SlideVisual};
use crate::core::clock::ClockHandle;
use crate::core::error::CarouselError;
use crate::core::file_manager::FileManager;
use crate::core::image_cache::ImageCache;
use crate::core::preload_manager::PreloadManager;
use crate::ui::indicators::show_indicator_dots;
use crate::ui::labels::*;
use crate::ui::slide_frame::{IndicatorDot, SlideFrame};

type Carousel = CarouselController<SlideFrame, IndicatorDot>;

// Mientras hay decodificaciones en curso se repinta con esta cadencia
const LOADING_REPAINT: Duration = Duration::from_millis(50);

/// Escala `image_size` para que quepa en `container` sin ampliarla y la centra.
pub fn fit_rect(container: Rect, image_size: Vec2) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Rect::from_center_size(container.center(), Vec2::ZERO);
    }
    let scale = (container.width() / image_size.x)
        .min(container.height() / image_size.y)
        .min(1.0);
    Rect::from_center_size(container.center(), image_size * scale)
}

#[derive(Debug, Default, Clone, Copy)]
struct KeyActions {
    next: bool,
    previous: bool,
    first: bool,
    last: bool,
    toggle_play: bool,
    toggle_fullscreen: bool,
    leave_fullscreen: bool,
}

fn build_carousel(paths: &[PathBuf], config: &SlideshowConfig) -> Result<Carousel, CarouselError> {
    let slides: Vec<SlideFrame> = paths.iter().cloned().map(SlideFrame::new).collect();
    let indicators = config
        .indicators
        .then(|| vec![IndicatorDot::default(); slides.len()]);
    CarouselController::new(
        slides,
        indicators,
        config.carousel_options(),
        ClockHandle::system(),
    )
}

pub struct SlideshowApp {
    config: SlideshowConfig,
    carousel: Carousel,
    image_paths: Vec<PathBuf>,
    image_cache: ImageCache,
    preload_manager: PreloadManager,
    fullscreen: bool,
    image_dir: Option<PathBuf>,
    show_about: bool,
    // Intervalo a restaurar cuando el puntero sale de la imagen
    hover_paused: Option<Duration>,
    status: Option<String>,
}

impl SlideshowApp {
    pub fn new(config: SlideshowConfig) -> Result<Self, CarouselError> {
        let carousel = build_carousel(&[], &config)?;
        Ok(Self {
            image_cache: ImageCache::new(config.effective_cache_size()),
            preload_manager: PreloadManager::new(config.preload_range),
            carousel,
            image_paths: Vec::new(),
            fullscreen: false,
            image_dir: None,
            show_about: false,
            hover_paused: None,
            status: None,
            config,
        })
    }

    pub fn open(&mut self, target: &Path) {
        let (image_paths, initial_index) = match FileManager::resolve_target(target) {
            Ok(found) => found,
            Err(e) => {
                log::error!("Error escaneando {}: {}", target.display(), e);
                self.status = Some(format!("{}: {}", target.display(), e));
                return;
            }
        };

        let carousel = match build_carousel(&image_paths, &self.config) {
            Ok(carousel) => carousel,
            Err(e) => {
                log::error!("No se pudo crear el carrusel: {e}");
                self.status = Some(e.to_string());
                return;
            }
        };

        log::info!("{} imágenes en {}", image_paths.len(), target.display());
        self.carousel = carousel;
        if initial_index > 0 {
            self.carousel.go_to(initial_index as i64);
        }
        self.image_dir = image_paths
            .first()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf);
        self.image_paths = image_paths;
        self.image_cache.clear();
        self.preload_manager.reset();
        self.hover_paused = None;
        self.status = self
            .image_paths
            .is_empty()
            .then(|| TEXT_EMPTYFOLDER.to_string());
    }

    fn toggle_auto_advance(&mut self) {
        if self.carousel.is_auto_advancing() || self.hover_paused.is_some() {
            self.carousel.stop_auto_advance();
            self.hover_paused = None;
        } else if let Err(e) = self.carousel.start_auto_advance(self.config.play_interval()) {
            log::warn!("No se pudo iniciar el avance automático: {e}");
        }
    }

    fn set_fullscreen(&mut self, ctx: &egui::Context, fullscreen: bool) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        self.fullscreen = fullscreen;
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Las acciones se aplican fuera de `ctx.input` para no retener su bloqueo
        let keys = ctx.input(|i| KeyActions {
            next: i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space),
            previous: i.key_pressed(egui::Key::ArrowLeft),
            first: i.key_pressed(egui::Key::Home),
            last: i.key_pressed(egui::Key::End),
            toggle_play: i.key_pressed(egui::Key::P),
            toggle_fullscreen: i.key_pressed(egui::Key::F11),
            leave_fullscreen: i.key_pressed(egui::Key::Escape),
        });

        if keys.leave_fullscreen && self.fullscreen {
            self.set_fullscreen(ctx, false);
        }
        if keys.toggle_fullscreen {
            self.set_fullscreen(ctx, !self.fullscreen);
        }
        self.apply_keys(keys);
    }

    /// Navegación y reproducción; la pantalla completa necesita el contexto.
    fn apply_keys(&mut self, keys: KeyActions) {
        if keys.next {
            self.carousel.next();
        }
        if keys.previous {
            self.carousel.previous();
        }
        if keys.first {
            self.carousel.go_to(0);
        }
        if keys.last {
            // Índice explícito: con la política `Clamp`, -1 iría a la primera
            self.carousel.go_to(self.carousel.len() as i64 - 1);
        }
        if keys.toggle_play {
            self.toggle_auto_advance();
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.open(&path);
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui);
                ui.separator();
                self.show_navigation_controls(ui);
                ui.separator();
                self.show_view_controls(ui, ctx);
                self.show_image_info(ui);
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button(format!("📂 {}", BTN_OPEN)).clicked() {
            let (filter_name, extensions) = FileManager::supported_file_filter();
            let mut dialog = FileDialog::new().add_filter(filter_name, &extensions);
            if let Some(dir) = &self.image_dir {
                dialog = dialog.set_directory(dir);
            }
            if let Some(path) = dialog.pick_file() {
                self.open(&path);
            }
        }
    }

    fn show_navigation_controls(&mut self, ui: &mut egui::Ui) {
        let can_navigate = self.carousel.len() > 1;

        if ui
            .add_enabled(can_navigate, egui::Button::new(format!("⬅️ {}", BTN_PREV)))
            .clicked()
        {
            self.carousel.previous();
        }

        if ui
            .add_enabled(can_navigate, egui::Button::new(format!("➡️ {}", BTN_NEXT)))
            .clicked()
        {
            self.carousel.next();
        }

        let playing = self.carousel.is_auto_advancing() || self.hover_paused.is_some();
        let label = if playing {
            format!("⏸ {}", BTN_PAUSE)
        } else {
            format!("▶ {}", BTN_PLAY)
        };
        if ui.add_enabled(can_navigate, egui::Button::new(label)).clicked() {
            self.toggle_auto_advance();
        }
    }

    fn show_view_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if ui.button(format!("🖥️ {}", BTN_FULLSCREEN)).clicked() {
            self.set_fullscreen(ctx, true);
        }

        if ui.button(format!("ℹ️ {}", BTN_ABOUT)).clicked() {
            self.show_about = true;
        }
    }

    fn show_image_info(&self, ui: &mut egui::Ui) {
        if self.carousel.is_empty() {
            return;
        }
        ui.separator();
        ui.label(format!(
            "{} / {}",
            self.carousel.current_index() + 1,
            self.carousel.len()
        ));

        if let Some(filename) = self.carousel.current_slide().and_then(|s| s.path().file_name()) {
            ui.label(filename.to_string_lossy());
        }
    }

    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        egui::Window::new(BTN_ABOUT)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(APP_NAME);
                    ui.label(format!("v{}", APP_VERSION));
                    ui.label(format!("{}{}", TEXT_AUTHOR, APP_AUTHOR));
                    ui.label(TEXT_LICENSE);
                    ui.label(TEXT_INFOAPP);
                });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    if ui.button(BTN_CLOSE).clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn show_indicators(&mut self, ctx: &egui::Context) {
        let clicked = match self.carousel.indicators() {
            Some(dots) if !dots.is_empty() => egui::TopBottomPanel::bottom("indicators")
                .show(ctx, |ui| {
                    ui.add_space(4.0);
                    let clicked = show_indicator_dots(ui, dots);
                    ui.add_space(4.0);
                    clicked
                })
                .inner,
            _ => None,
        };
        if let Some(index) = clicked {
            self.carousel.go_to(index as i64);
        }
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let panel = ui.available_rect_before_wrap();
            let hovered = ui.rect_contains_pointer(panel);
            self.update_hover_pause(hovered);

            let visible = self.visible_textures();
            if visible.is_empty() {
                self.show_placeholder_text(ui);
                return;
            }
            ui.allocate_rect(panel, egui::Sense::hover());
            for (texture, visual) in &visible {
                Self::paint_slide(ui, panel, texture, *visual);
            }
        });
    }

    fn update_hover_pause(&mut self, hovered: bool) {
        if !self.config.pause_on_hover {
            return;
        }
        if hovered && self.carousel.is_auto_advancing() {
            self.hover_paused = self.carousel.auto_advance_interval();
            self.carousel.stop_auto_advance();
        } else if !hovered {
            if let Some(interval) = self.hover_paused.take() {
                if let Err(e) = self.carousel.start_auto_advance(interval) {
                    log::warn!("No se pudo reanudar el avance automático: {e}");
                }
            }
        }
    }

    /// Texturas ya cargadas de las diapositivas que el modo actual deja ver.
    fn visible_textures(&self) -> Vec<(TextureHandle, SlideVisual)> {
        self.carousel
            .slides()
            .iter()
            .filter(|slide| match slide.visual() {
                SlideVisual::Shown => true,
                SlideVisual::Hidden => false,
                SlideVisual::Offset(percent) => percent.abs() < 100,
                SlideVisual::Opacity(alpha) => alpha > 0.0,
            })
            .filter_map(|slide| {
                self.image_cache
                    .peek(slide.path())
                    .map(|texture| (texture.clone(), slide.visual()))
            })
            .collect()
    }

    fn paint_slide(ui: &mut egui::Ui, panel: Rect, texture: &TextureHandle, visual: SlideVisual) {
        let mut rect = fit_rect(panel, texture.size_vec2());
        let mut tint = Color32::WHITE;
        match visual {
            SlideVisual::Offset(percent) => {
                rect = rect.translate(Vec2::new(panel.width() * percent as f32 / 100.0, 0.0));
            }
            SlideVisual::Opacity(alpha) => tint = Color32::WHITE.gamma_multiply(alpha),
            SlideVisual::Shown | SlideVisual::Hidden => {}
        }
        egui::Image::from_texture(texture)
            .fit_to_exact_size(rect.size())
            .tint(tint)
            .paint_at(ui, rect);
    }

    fn show_placeholder_text(&self, ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            if let Some(status) = &self.status {
                ui.label(status);
            }
            match self.carousel.current_slide() {
                None => {
                    ui.label(TEXT_OPENIMG);
                    ui.label(TEXT_ROWSORSPACE);
                    ui.label(TEXT_PLAYKEY);
                    ui.label(TEXT_F11FULLSCREEN);
                }
                Some(slide) if self.preload_manager.has_failed(slide.path()) => {
                    ui.label(TEXT_LOADFAILED);
                    ui.label(slide.path().display().to_string());
                }
                Some(_) => {
                    ui.label(TEXT_LOADINGIMG);
                }
            }
        });
    }

    fn preload(&mut self, ctx: &egui::Context) {
        if self.preload_manager.process_loaded_images(ctx, &mut self.image_cache) {
            ctx.request_repaint();
        }
        if let Some(path) = self.carousel.current_slide().map(|s| s.path().to_path_buf()) {
            // Refresca la actual en el orden LRU
            self.image_cache.get(&path);
        }
        self.preload_manager.preload_images_around_index(
            &self.image_paths,
            self.carousel.current_index(),
            &self.image_cache,
        );
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        if let Some(wait) = self.carousel.time_until_next_advance() {
            ctx.request_repaint_after(wait);
        }
        if self.preload_manager.is_busy() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }
}

impl eframe::App for SlideshowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_keyboard_input(ctx);
        self.carousel.tick();
        self.preload(ctx);

        if !self.fullscreen {
            self.show_toolbar(ctx);
        }
        self.show_indicators(ctx);
        self.show_about_dialog(ctx);
        self.show_main_content(ctx);

        self.schedule_repaint(ctx);
    }
}
