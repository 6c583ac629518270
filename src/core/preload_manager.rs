use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use egui::{ColorImage, Context, TextureHandle};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::cyclic;
use crate::core::image_cache::ImageCache;
use crate::core::image_loader_factory::ImageLoaderFactory;

enum Loaded {
    Image(PathBuf, ColorImage),
    Failed(PathBuf),
}

/// Índices a precargar: el actual primero y luego sus vecinos cíclicos
/// alternando adelante y atrás, sin repetidos.
pub fn neighbor_indices(current: usize, len: usize, range: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut indices = vec![current % len];
    for distance in 1..=range as i64 {
        for delta in [distance, -distance] {
            let index = cyclic::step(current, delta, len);
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }
    indices
}

pub struct PreloadManager {
    image_receiver: mpsc::Receiver<Loaded>,
    image_sender: mpsc::Sender<Loaded>,
    loading_paths: HashSet<PathBuf>,
    failed_paths: HashSet<PathBuf>,
    preload_range: usize,
    loader_factory: ImageLoaderFactory,
    pool: Option<ThreadPool>,
}

impl PreloadManager {
    pub fn new(preload_range: usize) -> Self {
        let (sender, receiver) = mpsc::channel();
        let threads = num_cpus::get().clamp(1, 4);
        let pool = match ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("precarga-{i}"))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                log::warn!("No se pudo crear el pool de precarga, se usa el global: {e}");
                None
            }
        };

        Self {
            image_receiver: receiver,
            image_sender: sender,
            loading_paths: HashSet::new(),
            failed_paths: HashSet::new(),
            preload_range,
            loader_factory: ImageLoaderFactory::new(),
            pool,
        }
    }

    pub fn preload_images_around_index(
        &mut self,
        image_paths: &[PathBuf],
        current_index: usize,
        image_cache: &ImageCache,
    ) {
        let paths_to_load: Vec<PathBuf> =
            neighbor_indices(current_index, image_paths.len(), self.preload_range)
                .into_iter()
                .map(|i| &image_paths[i])
                .filter(|path| {
                    !image_cache.contains(path)
                        && !self.loading_paths.contains(*path)
                        && !self.failed_paths.contains(*path)
                })
                .cloned()
                .collect();

        if paths_to_load.is_empty() {
            return;
        }
        self.loading_paths.extend(paths_to_load.iter().cloned());
        self.spawn_loading(paths_to_load);
    }

    fn spawn_loading(&self, paths: Vec<PathBuf>) {
        let sender = self.image_sender.clone();
        let factory = self.loader_factory.clone();

        let job = move || {
            paths
                .into_par_iter()
                .map(|path| match factory.load_image(path.clone()) {
                    Ok((path, color_image)) => Loaded::Image(path, color_image),
                    Err(e) => {
                        log::warn!("Error cargando {}: {}", path.display(), e);
                        Loaded::Failed(path)
                    }
                })
                .for_each_with(sender, |sender, loaded| {
                    // El receptor se ha cerrado
                    let _ = sender.send(loaded);
                });
        };

        match &self.pool {
            Some(pool) => pool.spawn(job),
            None => rayon::spawn(job),
        }
    }

    /// Sube a la GPU las imágenes decodificadas. Devuelve `true` si llegó alguna.
    pub fn process_loaded_images(&mut self, ctx: &Context, image_cache: &mut ImageCache) -> bool {
        let mut received = false;
        while let Ok(loaded) = self.image_receiver.try_recv() {
            received = true;
            match loaded {
                Loaded::Image(path, color_image) => {
                    if !self.loading_paths.remove(&path) {
                        continue;
                    }
                    let texture: TextureHandle = ctx.load_texture(
                        format!("image_{}", path.display()),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    image_cache.insert(path, texture);
                }
                Loaded::Failed(path) => {
                    if self.loading_paths.remove(&path) {
                        self.failed_paths.insert(path);
                    }
                }
            }
        }
        received
    }

    pub fn is_loading(&self, path: &Path) -> bool {
        self.loading_paths.contains(path)
    }

    pub fn is_busy(&self) -> bool {
        !self.loading_paths.is_empty()
    }

    pub fn has_failed(&self, path: &Path) -> bool {
        self.failed_paths.contains(path)
    }

    /// Olvida el estado al cambiar de carpeta. Los resultados en vuelo se
    /// descartan al llegar porque ya no están en `loading_paths`.
    pub fn reset(&mut self) {
        self.loading_paths.clear();
        self.failed_paths.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_wrap_around_the_ends() {
        assert_eq!(neighbor_indices(0, 5, 2), vec![0, 1, 4, 2, 3]);
        assert_eq!(neighbor_indices(4, 5, 1), vec![4, 0, 3]);
    }

    #[test]
    fn neighbors_never_repeat_on_short_lists() {
        assert_eq!(neighbor_indices(0, 2, 3), vec![0, 1]);
        assert_eq!(neighbor_indices(0, 1, 2), vec![0]);
    }

    #[test]
    fn neighbors_of_empty_list() {
        assert!(neighbor_indices(0, 0, 2).is_empty());
    }

    #[test]
    fn zero_range_is_current_only() {
        assert_eq!(neighbor_indices(3, 5, 0), vec![3]);
    }

    #[test]
    fn loads_and_uploads_neighbors() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for name in ["a.png", "b.png", "c.png"] {
            let path = dir.path().join(name);
            image::RgbaImage::new(2, 2).save(&path).unwrap();
            paths.push(path);
        }
        let broken = dir.path().join("d.png");
        std::fs::write(&broken, b"basura").unwrap();
        paths.push(broken.clone());

        let ctx = Context::default();
        let mut cache = ImageCache::new(8);
        let mut manager = PreloadManager::new(1);
        manager.preload_images_around_index(&paths, 0, &cache);
        assert!(manager.is_loading(&paths[0]));

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        while [&paths[0], &paths[1], &broken]
            .iter()
            .any(|p| manager.is_loading(p))
            && std::time::Instant::now() < deadline
        {
            manager.process_loaded_images(&ctx, &mut cache);
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert!(cache.contains(&paths[0]));
        assert!(cache.contains(&paths[1]));
        assert!(!cache.contains(&paths[2]));
        assert!(manager.has_failed(&broken));
    }
}
