use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::carousel::{CarouselOptions, RenderMode};
use crate::core::cyclic::GoToPolicy;
use crate::core::error::ConfigError;

pub const APP_NAME: &str = "Slideshow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Se lee del directorio de trabajo si no se indica `--config`.
pub const DEFAULT_CONFIG_FILE: &str = "slideshow.toml";
/// Intervalo usado por el botón de reproducir cuando la configuración no fija uno.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Avance automático desde el arranque, en milisegundos.
    pub interval_ms: Option<u64>,
    pub mode: RenderMode,
    pub goto_policy: GoToPolicy,
    /// Muestra los puntos indicadores bajo la imagen.
    pub indicators: bool,
    pub pause_on_hover: bool,
    /// Vecinos a cada lado de la diapositiva actual que se precargan.
    pub preload_range: usize,
    pub cache_size: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: None,
            mode: RenderMode::Single,
            goto_policy: GoToPolicy::Wrap,
            indicators: true,
            pause_on_hover: true,
            preload_range: 2,
            cache_size: 8,
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl SlideshowConfig {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, path)?;
        log::info!("Configuración cargada de {}", path.display());
        Ok(config)
    }

    /// `explicit` tiene prioridad; si no, se usa [`DEFAULT_CONFIG_FILE`] cuando
    /// existe y, en último caso, los valores por defecto.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn auto_advance(&self) -> Option<Duration> {
        self.interval_ms.map(Duration::from_millis)
    }

    pub fn play_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS))
    }

    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            mode: self.mode,
            goto_policy: self.goto_policy,
            auto_advance: self.auto_advance(),
        }
    }

    /// La caché debe poder guardar la actual y todos sus vecinos precargados.
    pub fn effective_cache_size(&self) -> usize {
        self.cache_size.max(2 * self.preload_range + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_comes_from_package_metadata() {
        assert_eq!(APP_AUTHOR, env!("CARGO_PKG_AUTHORS"));
        assert!(!APP_AUTHOR.is_empty());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = SlideshowConfig::from_toml_str("", Path::new("x.toml")).unwrap();
        assert_eq!(config, SlideshowConfig::default());
        assert_eq!(config.play_interval(), Duration::from_millis(DEFAULT_INTERVAL_MS));
    }

    #[test]
    fn parses_all_keys() {
        let toml = r#"
            interval_ms = 3000
            mode = "offset"
            goto_policy = "clamp"
            indicators = false
            pause_on_hover = false
            preload_range = 1
            cache_size = 4
            window_width = 800.0
            window_height = 600.0
        "#;
        let config = SlideshowConfig::from_toml_str(toml, Path::new("x.toml")).unwrap();
        assert_eq!(config.mode, RenderMode::Offset);
        assert_eq!(config.goto_policy, GoToPolicy::Clamp);
        assert!(!config.indicators);
        let options = config.carousel_options();
        assert_eq!(options.auto_advance, Some(Duration::from_millis(3000)));
        assert_eq!(options.mode, RenderMode::Offset);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SlideshowConfig::from_toml_str("velocidad = 3", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn bad_mode_is_rejected() {
        let err = SlideshowConfig::from_toml_str("mode = \"zoom\"", Path::new("x.toml")).unwrap_err();
        assert!(err.to_string().contains("x.toml"));
    }

    #[test]
    fn cache_holds_preloaded_neighbors() {
        let config = SlideshowConfig {
            preload_range: 5,
            cache_size: 2,
            ..Default::default()
        };
        assert_eq!(config.effective_cache_size(), 11);
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slideshow.toml");
        fs::write(&path, "mode = \"opacity\"\n").unwrap();
        let config = SlideshowConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.mode, RenderMode::Opacity);

        let missing = dir.path().join("otro.toml");
        let err = SlideshowConfig::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
