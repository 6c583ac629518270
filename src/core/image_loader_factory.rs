use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::ColorImage;
use image::ImageReader;

use crate::core::error::LoadError;
use crate::core::image_format::ImageFormat;

// Límite de tamaño de las texturas subidas a la GPU
const MAX_WIDTH: u32 = 1920;
const MAX_HEIGHT: u32 = 1080;

pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError>;
    fn supports_format(&self, format: ImageFormat) -> bool;
}

pub struct RasterImageLoader;

impl ImageLoader for RasterImageLoader {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError> {
        let reader = ImageReader::open(path)?
            .with_guessed_format()
            .map_err(|e| LoadError::Format(e.to_string()))?;

        let img = reader
            .decode()
            .map_err(|e| LoadError::Decode(e.to_string()))?;

        let img = if img.width() > MAX_WIDTH || img.height() > MAX_HEIGHT {
            img.resize(MAX_WIDTH, MAX_HEIGHT, image::imageops::FilterType::Triangle)
        } else {
            img
        };

        let rgba_img = img.to_rgba8();
        let size = [rgba_img.width() as usize, rgba_img.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba_img.as_raw()))
    }

    fn supports_format(&self, _format: ImageFormat) -> bool {
        true
    }
}

/// Elige el cargador según la extensión. Clonar es barato.
#[derive(Clone)]
pub struct ImageLoaderFactory {
    loaders: Arc<Vec<Box<dyn ImageLoader>>>,
}

impl Default for ImageLoaderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoaderFactory {
    pub fn new() -> Self {
        Self {
            loaders: Arc::new(vec![Box::new(RasterImageLoader)]),
        }
    }

    pub fn load_image(&self, path: PathBuf) -> Result<(PathBuf, ColorImage), LoadError> {
        let format = ImageFormat::from_path(&path)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.clone()))?;

        let loader = self
            .loaders
            .iter()
            .find(|loader| loader.supports_format(format))
            .ok_or_else(|| LoadError::UnsupportedFormat(path.clone()))?;

        let color_image = loader.load(&path)?;
        Ok((path, color_image))
    }
}
