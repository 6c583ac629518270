//! Aritmética de índices cíclicos, separada del renderizado.

use serde::Deserialize;

/// Cómo `go_to` trata un destino fuera de `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoToPolicy {
    #[default]
    Wrap,
    Clamp,
}

/// Desplaza `current` en `delta` posiciones con vuelta módulo `len`.
/// Con `len == 0` devuelve 0.
pub fn step(current: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    wrap(current as i64 + delta.rem_euclid(len as i64), len)
}

/// `((target mod len) + len) mod len`
pub fn wrap(target: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    target.rem_euclid(len as i64) as usize
}

pub fn clamp(target: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    target.clamp(0, len as i64 - 1) as usize
}

pub fn resolve(target: i64, len: usize, policy: GoToPolicy) -> usize {
    match policy {
        GoToPolicy::Wrap => wrap(target, len),
        GoToPolicy::Clamp => clamp(target, len),
    }
}
