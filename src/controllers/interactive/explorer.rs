use crate::controllers::interactive::data::frame::Frame;
use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::data::view_snapshot::ViewSnapshot;
use crate::controllers::interactive::errors::ExplorerError;
use crate::controllers::interactive::state::{Interaction, RenderState};
use crate::core::colour_schemes::ColourScheme;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::params::{DEFAULT_JULIA_CONSTANT, FractalParams};
use crate::core::fractals::presets::{JuliaPreset, LocationPreset};
use num_complex::Complex64;
use std::time::Instant;
use tracing::debug;

pub const DEFAULT_MAX_ITERATIONS: u32 = 150;
/// Zooming out with an empty history never goes below this.
pub const MIN_ZOOM: f64 = 0.1;
pub const ZOOM_FACTOR: f64 = 2.0;

/// View state of an interactive session: which fractal, where, and how it
/// is coloured. All changes are refused while a render is in progress.
#[derive(Debug)]
pub struct Explorer {
    kind: FractalKind,
    julia_constant: Complex64,
    viewport: Viewport,
    scheme: ColourScheme,
    history: Vec<ViewSnapshot>,
    state: RenderState,
    generation: u64,
}

impl Explorer {
    /// Mandelbrot overview at the default iteration budget.
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        let kind = FractalKind::default();
        let viewport = Viewport::new(
            kind.default_center(),
            1.0,
            width,
            height,
            DEFAULT_MAX_ITERATIONS,
        )?;

        Ok(Self::with_view(
            kind,
            viewport,
            DEFAULT_JULIA_CONSTANT,
            ColourScheme::default(),
        ))
    }

    /// Starts from an explicit view. The constant is kept even when `kind`
    /// is Mandelbrot so switching later picks it up.
    #[must_use]
    pub fn with_view(
        kind: FractalKind,
        viewport: Viewport,
        julia_constant: Complex64,
        scheme: ColourScheme,
    ) -> Self {
        Self {
            kind,
            julia_constant,
            viewport,
            scheme,
            history: Vec::new(),
            state: RenderState::Idle,
            generation: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex64 {
        self.julia_constant
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourScheme {
        self.scheme
    }

    #[must_use]
    pub fn history(&self) -> &[ViewSnapshot] {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        self.state
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.state == RenderState::Rendering
    }

    /// Generation of the most recently started render; 0 before the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        match self.kind {
            FractalKind::Mandelbrot => FractalParams::Mandelbrot,
            FractalKind::Julia => FractalParams::Julia {
                c: self.julia_constant,
            },
        }
    }

    /// Recentres on the point under pixel `(px, py)` and doubles the zoom.
    pub fn click_zoom(&mut self, px: f64, py: f64) -> Result<Interaction, ExplorerError> {
        if self.refuse("click_zoom") {
            return Ok(Interaction::Ignored);
        }

        let target = self.viewport.pixel_to_complex(px, py);
        let zoomed = self
            .viewport
            .with_view(target, self.viewport.zoom() * ZOOM_FACTOR)?;

        self.history.push(self.snapshot());
        self.viewport = zoomed;
        debug!(re = target.re, im = target.im, zoom = zoomed.zoom(), "zoomed in");

        Ok(Interaction::Applied)
    }

    /// Returns to the previous view, or halves the zoom (not below
    /// [`MIN_ZOOM`]) when there is no history.
    pub fn zoom_out(&mut self) -> Result<Interaction, ExplorerError> {
        if self.refuse("zoom_out") {
            return Ok(Interaction::Ignored);
        }

        self.viewport = match self.history.pop() {
            Some(previous) => self.viewport.with_view(previous.center, previous.zoom)?,
            None => self.viewport.with_view(
                self.viewport.center(),
                (self.viewport.zoom() / ZOOM_FACTOR).max(MIN_ZOOM),
            )?,
        };

        Ok(Interaction::Applied)
    }

    pub fn reset(&mut self) -> Result<Interaction, ExplorerError> {
        if self.refuse("reset") {
            return Ok(Interaction::Ignored);
        }

        self.reset_view()?;

        Ok(Interaction::Applied)
    }

    /// Jumps to a Mandelbrot location, switching kind if needed.
    pub fn load_location(&mut self, preset: &LocationPreset) -> Result<Interaction, ExplorerError> {
        if self.refuse("load_location") {
            return Ok(Interaction::Ignored);
        }

        self.viewport = self.viewport.with_view(preset.center, preset.zoom)?;
        self.kind = FractalKind::Mandelbrot;
        self.history.clear();
        debug!(preset = preset.name, "loaded location");

        Ok(Interaction::Applied)
    }

    /// Changes the Julia constant. The active kind is left alone.
    pub fn set_julia_constant(&mut self, c: Complex64) -> Result<Interaction, ExplorerError> {
        if self.refuse("set_julia_constant") {
            return Ok(Interaction::Ignored);
        }

        FractalParams::julia(c)?;
        self.julia_constant = c;

        Ok(Interaction::Applied)
    }

    /// Loads a named constant and shows the Julia set, resetting the view
    /// only when coming from another kind.
    pub fn load_julia_preset(&mut self, preset: &JuliaPreset) -> Result<Interaction, ExplorerError> {
        if self.refuse("load_julia_preset") {
            return Ok(Interaction::Ignored);
        }

        FractalParams::julia(preset.c)?;
        self.julia_constant = preset.c;

        if self.kind != FractalKind::Julia {
            self.kind = FractalKind::Julia;
            self.reset_view()?;
        }
        debug!(preset = preset.name, "loaded julia constant");

        Ok(Interaction::Applied)
    }

    /// Sets the zoom around the current center. History is left alone, so
    /// this is for continuous changes rather than navigation.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<Interaction, ExplorerError> {
        if self.refuse("set_zoom") {
            return Ok(Interaction::Ignored);
        }

        self.viewport = self.viewport.with_view(self.viewport.center(), zoom)?;

        Ok(Interaction::Applied)
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<Interaction, ExplorerError> {
        if self.refuse("set_max_iterations") {
            return Ok(Interaction::Ignored);
        }

        self.viewport = self.viewport.with_max_iterations(max_iterations)?;

        Ok(Interaction::Applied)
    }

    pub fn set_colour_scheme(&mut self, scheme: ColourScheme) -> Interaction {
        if self.refuse("set_colour_scheme") {
            return Interaction::Ignored;
        }

        self.scheme = scheme;

        Interaction::Applied
    }

    /// Switches fractal and returns to that fractal's default view.
    pub fn set_fractal_kind(&mut self, kind: FractalKind) -> Result<Interaction, ExplorerError> {
        if self.refuse("set_fractal_kind") {
            return Ok(Interaction::Ignored);
        }

        self.kind = kind;
        self.reset_view()?;
        debug!(%kind, "switched fractal");

        Ok(Interaction::Applied)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<Interaction, ExplorerError> {
        if self.refuse("resize") {
            return Ok(Interaction::Ignored);
        }

        self.viewport = self.viewport.with_size(width, height)?;

        Ok(Interaction::Applied)
    }

    /// Moves to `Rendering` and hands out the parameters to draw, or `None`
    /// when a render is already running.
    pub fn begin_render(&mut self) -> Option<RenderJob> {
        if self.is_rendering() {
            debug!(generation = self.generation, "render already in progress");
            return None;
        }

        self.state = RenderState::Rendering;
        self.generation += 1;
        debug!(generation = self.generation, "render started");

        Some(RenderJob {
            generation: self.generation,
            viewport: self.viewport,
            params: self.params(),
            scheme: self.scheme,
        })
    }

    pub fn finish_render(&mut self) {
        if self.state == RenderState::Rendering {
            debug!(generation = self.generation, "render finished");
        }

        self.state = RenderState::Idle;
    }

    /// Runs one full render cycle on the calling thread.
    pub fn render_frame(&mut self) -> Option<Frame> {
        let job = self.begin_render()?;
        let start = Instant::now();
        let buffer = job.render();
        let render_duration = start.elapsed();

        self.finish_render();

        Some(Frame {
            generation: job.generation,
            buffer,
            render_duration,
        })
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            center: self.viewport.center(),
            zoom: self.viewport.zoom(),
        }
    }

    fn reset_view(&mut self) -> Result<(), ViewportError> {
        self.viewport = self.viewport.with_view(self.kind.default_center(), 1.0)?;
        self.history.clear();

        Ok(())
    }

    fn refuse(&self, request: &'static str) -> bool {
        if self.is_rendering() {
            debug!(request, "ignored request while rendering");
            return true;
        }

        false
    }
}
