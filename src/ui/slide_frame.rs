use std::path::{Path, PathBuf};

use crate::core::carousel::{Indicator, Slide, SlideVisual};

/// Diapositiva de la ventana: la ruta de la imagen y el último estado visual
/// que le asignó el carrusel.
#[derive(Debug, Clone)]
pub struct SlideFrame {
    path: PathBuf,
    visual: SlideVisual,
}

impl SlideFrame {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            visual: SlideVisual::Hidden,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn visual(&self) -> SlideVisual {
        self.visual
    }
}

impl Slide for SlideFrame {
    fn apply(&mut self, visual: SlideVisual) {
        self.visual = visual;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorDot {
    active: bool,
}

impl IndicatorDot {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Indicator for IndicatorDot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
