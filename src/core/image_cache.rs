use std::collections::HashMap;
use std::path::{Path, PathBuf};

use egui::TextureHandle;

/// Caché LRU de texturas indexada por ruta.
pub struct ImageCache<T = TextureHandle> {
    textures: HashMap<PathBuf, T>,
    max_cache_size: usize,
    access_order: Vec<PathBuf>,
}

impl<T> ImageCache<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            textures: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    pub fn get(&mut self, path: &Path) -> Option<&T> {
        if !self.textures.contains_key(path) {
            return None;
        }
        self.touch(path);
        self.textures.get(path)
    }

    /// Consulta sin alterar el orden de uso.
    pub fn peek(&self, path: &Path) -> Option<&T> {
        self.textures.get(path)
    }

    pub fn insert(&mut self, path: PathBuf, texture: T) {
        if self.textures.contains_key(&path) {
            self.textures.insert(path.clone(), texture);
            self.touch(&path);
            return;
        }

        while self.textures.len() >= self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.textures.remove(&oldest);
        }

        self.textures.insert(path.clone(), texture);
        self.access_order.push(path);
    }

    pub fn clear(&mut self) {
        self.textures.clear();
        self.access_order.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.textures.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn touch(&mut self, path: &Path) {
        if let Some(pos) = self.access_order.iter().position(|p| p == path) {
            let path = self.access_order.remove(pos);
            self.access_order.push(path);
        }
    }
}
