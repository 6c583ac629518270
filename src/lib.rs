//! Presentación de imágenes construida sobre un controlador de carrusel
//! cíclico ([`core::carousel::CarouselController`]).

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
