pub const BTN_OPEN: &str = "Abrir";
pub const BTN_PREV: &str = "Anterior";
pub const BTN_NEXT: &str = "Siguiente";
pub const BTN_PLAY: &str = "Reproducir";
pub const BTN_PAUSE: &str = "Pausa";
pub const BTN_FULLSCREEN: &str = "Pantalla completa";
pub const BTN_ABOUT: &str = "Acerca de";
pub const BTN_CLOSE: &str = "Cerrar";

pub const TEXT_AUTHOR: &str = "Autor: ";
pub const TEXT_LICENSE: &str = "Licencia MIT";
pub const TEXT_INFOAPP: &str = "Presentación de imágenes con avance automático";
pub const TEXT_OPENIMG: &str = "Abre una imagen o carpeta, o arrástrala aquí";
pub const TEXT_ROWSORSPACE: &str = "Flechas o espacio para navegar, Inicio/Fin para ir a los extremos";
pub const TEXT_PLAYKEY: &str = "P para reproducir o pausar";
pub const TEXT_F11FULLSCREEN: &str = "F11 para pantalla completa";
pub const TEXT_LOADINGIMG: &str = "Cargando imagen...";
pub const TEXT_LOADFAILED: &str = "No se pudo cargar la imagen";
pub const TEXT_EMPTYFOLDER: &str = "La carpeta no contiene imágenes soportadas";
