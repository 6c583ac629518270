use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("hay {indicators} indicadores para {slides} diapositivas")]
    IndicatorCountMismatch { slides: usize, indicators: usize },
    #[error("el intervalo de avance automático debe ser mayor que cero")]
    ZeroInterval,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de formato: {0}")]
    Format(String),
    #[error("Error de decodificación: {0}")]
    Decode(String),
    #[error("Formato no soportado: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo leer {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuración inválida en {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
