use crate::controllers::interactive::{
    AnimationScheduler, Explorer, Frame, Interaction, RenderJob, TickAction,
};
use crate::input::gui::actions::{PanelAction, apply_action};
use crate::input::gui::errors::GuiError;
use crate::input::gui::panel::{self, PanelView};
use crate::input::gui::ports::presenter::GuiPresenterPort;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    explorer: Explorer,
    animation: AnimationScheduler,
    started: Instant,
    cursor: Option<(f64, f64)>,
    needs_render: bool,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Ok(Self {
            window,
            presenter,
            explorer: Explorer::new(size.width.max(1), size.height.max(1))?,
            animation: AnimationScheduler::new(),
            started: Instant::now(),
            cursor: None,
            needs_render: true,
            last_render_duration: None,
            last_error_message: None,
            egui_ctx,
            egui_state,
        })
    }

    /// Blocks until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let window = self.window;
        let mut redraw_pending = true;
        let mut failure = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let response = self.egui_state.on_window_event(window, event);

                if response.repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = self.update_ui();
                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        self.render_if_needed();

                        if let Err(e) = self.draw(egui_output) {
                            error!("render error: {e}");
                            failure = Some(e);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.cursor = Some((position.x, position.y));
                    }
                    WindowEvent::CursorLeft { .. } => {
                        self.cursor = None;
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !response.consumed => {
                        if let Some((x, y)) = self.cursor {
                            self.apply(PanelAction::ClickZoom { x, y });
                            redraw_pending = true;
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if self.tick_animation() {
                    redraw_pending = true;
                }

                if redraw_pending || self.needs_render {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        match failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let view = PanelView::capture(
            &self.explorer,
            &self.animation,
            self.last_render_duration,
            self.last_error_message.as_deref(),
        );
        let mut actions = Vec::new();

        let mut egui_output = self
            .egui_ctx
            .run(raw_input, |ctx| panel::show(ctx, &view, &mut actions));

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        for action in actions {
            self.apply(action);
        }

        egui_output
    }

    fn apply(&mut self, action: PanelAction) {
        match apply_action(&mut self.explorer, &mut self.animation, action) {
            Ok(Interaction::Applied) => {
                self.needs_render = true;
                self.last_error_message = None;
            }
            Ok(Interaction::Ignored) => debug!(?action, "action ignored"),
            Err(e) => {
                warn!(?action, "action rejected: {e}");
                self.last_error_message = Some(e.to_string());
            }
        }
    }

    fn tick_animation(&mut self) -> bool {
        match self.animation.tick(&mut self.explorer, self.started.elapsed()) {
            Ok(TickAction::Submitted(job)) => {
                self.complete(job);
                true
            }
            Ok(TickAction::Skipped | TickAction::Inactive) => false,
            Err(e) => {
                warn!("animation stopped: {e}");
                self.animation.stop();
                self.last_error_message = Some(e.to_string());
                false
            }
        }
    }

    fn render_if_needed(&mut self) {
        if !self.needs_render {
            return;
        }

        if let Some(job) = self.explorer.begin_render() {
            self.complete(job);
        }
    }

    fn complete(&mut self, job: RenderJob) {
        let start = Instant::now();
        let buffer = job.render();
        let frame = Frame {
            generation: job.generation,
            buffer,
            render_duration: start.elapsed(),
        };

        self.explorer.finish_render();
        self.presenter.present_frame(&frame);
        self.last_render_duration = Some(frame.render_duration);
        self.needs_render = false;
    }

    fn draw(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(e) = self.presenter.resize(width, height) {
            error!("failed to resize surface: {e}");
            self.last_error_message = Some(e.to_string());
            return;
        }

        match self.explorer.resize(width, height) {
            Ok(_) => self.needs_render = true,
            Err(e) => self.last_error_message = Some(e.to_string()),
        }
    }
}
