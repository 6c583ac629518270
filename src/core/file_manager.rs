use std::fs;
use std::path::{Path, PathBuf};

use crate::core::image_format::ImageFormat;

pub struct FileManager;

impl FileManager {
    /// Imágenes soportadas de `dir`, ordenadas por ruta.
    pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut image_paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();
        Ok(image_paths)
    }

    /// Resuelve una ruta abierta por el usuario: si es un archivo se escanea
    /// su carpeta y se devuelve su posición; si es una carpeta, posición 0.
    pub fn resolve_target(target: &Path) -> Result<(Vec<PathBuf>, usize), std::io::Error> {
        if !target.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no existe {}", target.display()),
            ));
        }
        if target.is_dir() {
            return Ok((Self::scan_directory(target)?, 0));
        }
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let paths = Self::scan_directory(parent)?;
        let index = Self::find_index_of_file(&paths, target).unwrap_or(0);
        Ok((paths, index))
    }

    pub fn find_index_of_file(paths: &[PathBuf], target: &Path) -> Option<usize> {
        paths.iter().position(|p| p == target).or_else(|| {
            // "foto.png" frente a "./foto.png"
            paths.iter().position(|p| p.file_name() == target.file_name())
        })
    }

    pub fn supported_file_filter() -> (&'static str, Vec<&'static str>) {
        ("Imagen", ImageFormat::supported_extensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "c.png");
        touch(dir.path(), "a.JPG");
        touch(dir.path(), "notas.txt");
        touch(dir.path(), "b.webp");
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let paths = FileManager::scan_directory(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.webp", "c.png"]);
    }

    #[test]
    fn resolve_file_starts_at_its_position() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1.png");
        let second = touch(dir.path(), "2.png");
        touch(dir.path(), "3.png");

        let (paths, index) = FileManager::resolve_target(&second).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(index, 1);
    }

    #[test]
    fn resolve_directory_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "x.gif");
        let (paths, index) = FileManager::resolve_target(dir.path()).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(index, 0);
    }

    #[test]
    fn resolve_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        let err = FileManager::resolve_target(&dir.path().join("typo.png")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileManager::scan_directory(&dir.path().join("nada")).is_err());
    }
}
