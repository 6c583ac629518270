pub mod auto_advance;
pub mod carousel;
pub mod clock;
pub mod cyclic;
pub mod error;
pub mod file_manager;
pub mod image_cache;
pub mod image_format;
pub mod image_loader_factory;
pub mod preload_manager;
