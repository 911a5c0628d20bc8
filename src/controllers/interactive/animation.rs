use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::errors::ExplorerError;
use crate::controllers::interactive::explorer::Explorer;
use crate::controllers::interactive::state::Interaction;
use crate::core::fractals::fractal_kinds::FractalKind;
use num_complex::Complex64;
use std::time::Duration;
use tracing::{debug, trace};

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 3.0;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Zoom range the zoom animation bounces between.
pub const ZOOM_ANIMATION_MIN: f64 = 1.0;
pub const ZOOM_ANIMATION_MAX: f64 = 100.0;
/// Relative zoom change per tick at speed 1.
pub const ZOOM_STEP: f64 = 0.01;

/// Point on the closed loop the animated Julia constant follows, `t` in
/// seconds scaled by `speed`.
#[must_use]
pub fn julia_constant_at(t: f64, speed: f64) -> Complex64 {
    let phase = t * speed;

    Complex64::new(
        -0.7 + 0.3 * phase.cos(),
        0.27015 + 0.2 * (1.3 * phase).sin(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    /// Sweep the Julia constant around a loop; Julia sets only.
    #[default]
    JuliaSweep,
    /// Zoom in and out around the current center, either fractal.
    Zoom,
}

impl AnimationMode {
    pub const ALL: &'static [Self] = &[Self::JuliaSweep, Self::Zoom];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JuliaSweep => "Julia sweep",
            Self::Zoom => "Auto zoom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One zoom-animation step: grows or shrinks `zoom` by `ZOOM_STEP * speed`
/// and turns around once it reaches either end of the range.
#[must_use]
pub fn next_zoom(zoom: f64, speed: f64, direction: ZoomDirection) -> (f64, ZoomDirection) {
    let step = ZOOM_STEP * speed;
    let next = match direction {
        ZoomDirection::In => zoom * (1.0 + step),
        ZoomDirection::Out => zoom * (1.0 - step),
    };

    if next >= ZOOM_ANIMATION_MAX {
        (ZOOM_ANIMATION_MAX, ZoomDirection::Out)
    } else if next <= ZOOM_ANIMATION_MIN {
        (ZOOM_ANIMATION_MIN, ZoomDirection::In)
    } else {
        (next, direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickAction {
    Submitted(RenderJob),
    /// A render was still running; this tick was dropped.
    Skipped,
    /// Animation is stopped or does not apply to the current fractal.
    Inactive,
}

/// Drives one of the [`AnimationMode`]s from a host loop. Ticks that land
/// while a frame is rendering are skipped rather than queued, so a slow
/// render lowers the frame rate instead of building a backlog.
#[derive(Debug, Clone, Copy)]
pub struct AnimationScheduler {
    active: bool,
    speed: f64,
    mode: AnimationMode,
    direction: ZoomDirection,
    /// Fractal the zoom animation started on; switching away stops it.
    zoom_kind: Option<FractalKind>,
}

impl AnimationScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: false,
            speed: DEFAULT_SPEED,
            mode: AnimationMode::default(),
            direction: ZoomDirection::In,
            zoom_kind: None,
        }
    }

    /// Zoom animations always start by zooming in.
    pub fn start(&mut self) {
        self.active = true;
        self.direction = ZoomDirection::In;
        self.zoom_kind = None;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Changing mode stops a running animation.
    pub fn set_mode(&mut self, mode: AnimationMode) {
        if mode != self.mode {
            self.stop();
            self.mode = mode;
        }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Clamped into `[MIN_SPEED, MAX_SPEED]`; NaN keeps the current speed.
    pub fn set_speed(&mut self, speed: f64) {
        if !speed.is_nan() {
            self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        }
    }

    /// Advances the animation to `elapsed` and starts a render of the new
    /// view. The caller owns the returned job and must call
    /// [`Explorer::finish_render`] once it is drawn.
    pub fn tick(
        &mut self,
        explorer: &mut Explorer,
        elapsed: Duration,
    ) -> Result<TickAction, ExplorerError> {
        if !self.active {
            return Ok(TickAction::Inactive);
        }

        match self.mode {
            AnimationMode::JuliaSweep => self.sweep_julia(explorer, elapsed),
            AnimationMode::Zoom => self.step_zoom(explorer),
        }
    }

    fn sweep_julia(
        &self,
        explorer: &mut Explorer,
        elapsed: Duration,
    ) -> Result<TickAction, ExplorerError> {
        if explorer.kind() != FractalKind::Julia {
            return Ok(TickAction::Inactive);
        }

        if explorer.is_rendering() {
            trace!(elapsed_ms = elapsed.as_millis() as u64, "animation tick skipped");
            return Ok(TickAction::Skipped);
        }

        let c = julia_constant_at(elapsed.as_secs_f64(), self.speed);
        match explorer.set_julia_constant(c)? {
            Interaction::Applied => Ok(submit(explorer)),
            Interaction::Ignored => Ok(TickAction::Skipped),
        }
    }

    fn step_zoom(&mut self, explorer: &mut Explorer) -> Result<TickAction, ExplorerError> {
        let kind = *self.zoom_kind.get_or_insert(explorer.kind());
        if kind != explorer.kind() {
            debug!(from = %kind, to = %explorer.kind(), "fractal changed, zoom animation stopped");
            self.stop();
            return Ok(TickAction::Inactive);
        }

        if explorer.is_rendering() {
            trace!("zoom tick skipped");
            return Ok(TickAction::Skipped);
        }

        let (zoom, direction) = next_zoom(explorer.viewport().zoom(), self.speed, self.direction);
        match explorer.set_zoom(zoom)? {
            Interaction::Applied => {
                self.direction = direction;
                Ok(submit(explorer))
            }
            Interaction::Ignored => Ok(TickAction::Skipped),
        }
    }
}

fn submit(explorer: &mut Explorer) -> TickAction {
    explorer
        .begin_render()
        .map_or(TickAction::Skipped, TickAction::Submitted)
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
