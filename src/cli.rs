use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::config::SlideshowConfig;
use crate::core::carousel::RenderMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Single,
    Offset,
    Opacity,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => RenderMode::Single,
            ModeArg::Offset => RenderMode::Offset,
            ModeArg::Opacity => RenderMode::Opacity,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "slideshow", version, about = "Presentación de imágenes de una carpeta")]
pub struct Cli {
    /// Carpeta o imagen con la que empezar
    pub path: Option<PathBuf>,

    /// Archivo de configuración TOML
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Avance automático cada MS milisegundos
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Oculta los puntos indicadores
    #[arg(long)]
    pub no_indicators: bool,
}

impl Cli {
    /// Las opciones de línea de comandos pisan las del archivo.
    pub fn apply(&self, config: &mut SlideshowConfig) {
        if let Some(ms) = self.interval_ms {
            config.interval_ms = Some(ms);
        }
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if self.no_indicators {
            config.indicators = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "slideshow",
            "fotos",
            "--interval-ms",
            "1500",
            "--mode",
            "opacity",
            "--no-indicators",
        ])
        .unwrap();
        let mut config = SlideshowConfig::default();
        cli.apply(&mut config);
        assert_eq!(cli.path, Some(PathBuf::from("fotos")));
        assert_eq!(config.interval_ms, Some(1500));
        assert_eq!(config.mode, RenderMode::Opacity);
        assert!(!config.indicators);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::try_parse_from(["slideshow"]).unwrap();
        let mut config = SlideshowConfig {
            interval_ms: Some(9000),
            ..Default::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.interval_ms, Some(9000));
        assert!(config.indicators);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["slideshow", "--mode", "zoom"]).is_err());
    }
}
