//! Controlador de carrusel cíclico.
//!
//! El único estado de navegación es el índice actual. Cada operación calcula
//! el índice nuevo con [`cyclic`](super::cyclic) y termina llamando a
//! [`CarouselController::render`], el único punto que escribe estado visual.

use std::time::Duration;

use serde::Deserialize;

use crate::core::auto_advance::{AutoAdvance, TimerToken};
use crate::core::clock::{Clock, ClockHandle};
use crate::core::cyclic::{self, GoToPolicy};
use crate::core::error::CarouselError;

/// Estado visual que el controlador asigna a cada diapositiva.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideVisual {
    Shown,
    Hidden,
    /// Desplazamiento horizontal en porcentaje del ancho: `100 * (pos - actual)`.
    Offset(i64),
    Opacity(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Una sola diapositiva visible.
    #[default]
    Single,
    Offset,
    Opacity,
}

impl RenderMode {
    pub fn visual_for(self, position: usize, current: usize) -> SlideVisual {
        match self {
            RenderMode::Single if position == current => SlideVisual::Shown,
            RenderMode::Single => SlideVisual::Hidden,
            RenderMode::Offset => SlideVisual::Offset(100 * (position as i64 - current as i64)),
            RenderMode::Opacity if position == current => SlideVisual::Opacity(1.0),
            RenderMode::Opacity => SlideVisual::Opacity(0.0),
        }
    }
}

pub trait Slide {
    fn apply(&mut self, visual: SlideVisual);
}

pub trait Indicator {
    fn set_active(&mut self, active: bool);
}

/// Indicador vacío para carruseles sin puntos.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl Indicator for NoIndicator {
    fn set_active(&mut self, _active: bool) {}
}

#[derive(Debug, Clone, Default)]
pub struct CarouselOptions {
    pub mode: RenderMode,
    pub goto_policy: GoToPolicy,
    pub auto_advance: Option<Duration>,
}

#[derive(Debug)]
pub struct CarouselController<S, I = NoIndicator> {
    slides: Vec<S>,
    indicators: Option<Vec<I>>,
    current: usize,
    mode: RenderMode,
    goto_policy: GoToPolicy,
    timer: AutoAdvance,
    clock: ClockHandle,
}

impl<S: Slide> CarouselController<S, NoIndicator> {
    pub fn without_indicators(
        slides: Vec<S>,
        options: CarouselOptions,
        clock: ClockHandle,
    ) -> Result<Self, CarouselError> {
        Self::new(slides, None, options, clock)
    }
}

impl<S: Slide, I: Indicator> CarouselController<S, I> {
    /// Construye el controlador en el índice 0 y renderiza el estado inicial.
    ///
    /// Falla si `indicators` no tiene la misma longitud que `slides`, o si el
    /// intervalo de avance automático es cero.
    pub fn new(
        slides: Vec<S>,
        indicators: Option<Vec<I>>,
        options: CarouselOptions,
        clock: ClockHandle,
    ) -> Result<Self, CarouselError> {
        if let Some(indicators) = &indicators {
            if indicators.len() != slides.len() {
                return Err(CarouselError::IndicatorCountMismatch {
                    slides: slides.len(),
                    indicators: indicators.len(),
                });
            }
        }
        if options.auto_advance == Some(Duration::ZERO) {
            return Err(CarouselError::ZeroInterval);
        }

        let mut carousel = Self {
            slides,
            indicators,
            current: 0,
            mode: options.mode,
            goto_policy: options.goto_policy,
            timer: AutoAdvance::new(),
            clock,
        };
        log::debug!(
            "carrusel creado: {} diapositivas, modo {:?}",
            carousel.len(),
            carousel.mode
        );
        carousel.render();
        if let Some(interval) = options.auto_advance {
            carousel.start_auto_advance(interval)?;
        }
        Ok(carousel)
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    pub fn go_to(&mut self, target: i64) {
        if self.is_empty() {
            return;
        }
        self.current = cyclic::resolve(target, self.len(), self.goto_policy);
        self.render();
    }

    fn step(&mut self, delta: i64) {
        if self.is_empty() {
            return;
        }
        self.current = cyclic::step(self.current, delta, self.len());
        self.render();
    }

    /// Proyecta el índice actual sobre diapositivas e indicadores.
    pub fn render(&mut self) {
        let current = self.current;
        let mode = self.mode;
        for (position, slide) in self.slides.iter_mut().enumerate() {
            slide.apply(mode.visual_for(position, current));
        }
        if let Some(indicators) = self.indicators.as_mut() {
            for (position, indicator) in indicators.iter_mut().enumerate() {
                indicator.set_active(position == current);
            }
        }
    }

    /// Arranca el avance automático; si ya había uno activo lo reemplaza.
    pub fn start_auto_advance(&mut self, interval: Duration) -> Result<TimerToken, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        let token = self.timer.start(self.clock.now_millis(), interval);
        log::debug!("avance automático cada {} ms", interval.as_millis());
        Ok(token)
    }

    pub fn stop_auto_advance(&mut self) {
        if self.timer.is_running() {
            log::debug!("avance automático detenido");
        }
        self.timer.stop();
    }

    /// Aplica los disparos vencidos según el reloj. Devuelve cuántos hubo.
    pub fn tick(&mut self) -> u64 {
        let fired = self.timer.due_firings(self.clock.now_millis());
        if fired > 0 && !self.is_empty() {
            let delta = (fired % self.len() as u64) as i64;
            self.step(delta);
        }
        fired
    }

    /// Aplica un disparo encolado externamente. Se ignora si el token es de un
    /// temporizador ya detenido o reemplazado.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if !self.timer.accepts(token) {
            return false;
        }
        self.timer.reschedule(self.clock.now_millis());
        self.next();
        true
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_running()
    }

    pub fn auto_advance_interval(&self) -> Option<Duration> {
        self.timer.interval()
    }

    pub fn time_until_next_advance(&self) -> Option<Duration> {
        self.timer.time_until_next(self.clock.now_millis())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn current_slide(&self) -> Option<&S> {
        self.slides.get(self.current)
    }

    pub fn indicators(&self) -> Option<&[I]> {
        self.indicators.as_deref()
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
