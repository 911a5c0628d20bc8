use crate::controllers::interactive::animation::{MAX_SPEED, MIN_SPEED};
use crate::controllers::interactive::{AnimationMode, AnimationScheduler, Explorer};
use crate::core::colour_schemes::ColourScheme;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::presets::{JULIA_PRESETS, MANDELBROT_LOCATIONS};
use crate::input::gui::actions::PanelAction;
use num_complex::Complex64;
use std::time::Duration;

const ITERATION_RANGE: std::ops::RangeInclusive<u32> = 50..=500;

/// Values the panel displays, copied out before the egui pass so the panel
/// never holds a borrow of the explorer.
pub(crate) struct PanelView<'a> {
    pub kind: FractalKind,
    pub center: Complex64,
    pub zoom: f64,
    pub max_iterations: u32,
    pub julia_constant: Complex64,
    pub scheme: ColourScheme,
    pub history_depth: usize,
    pub animating: bool,
    pub animation_mode: AnimationMode,
    pub animation_speed: f64,
    pub generation: u64,
    pub last_render_duration: Option<Duration>,
    pub last_error_message: Option<&'a str>,
}

impl<'a> PanelView<'a> {
    pub(crate) fn capture(
        explorer: &Explorer,
        animation: &AnimationScheduler,
        last_render_duration: Option<Duration>,
        last_error_message: Option<&'a str>,
    ) -> Self {
        let viewport = explorer.viewport();

        Self {
            kind: explorer.kind(),
            center: viewport.center(),
            zoom: viewport.zoom(),
            max_iterations: viewport.max_iterations(),
            julia_constant: explorer.julia_constant(),
            scheme: explorer.colour_scheme(),
            history_depth: explorer.history().len(),
            animating: animation.is_active(),
            animation_mode: animation.mode(),
            animation_speed: animation.speed(),
            generation: explorer.generation(),
            last_render_duration,
            last_error_message,
        }
    }
}

pub(crate) fn show(ctx: &egui::Context, view: &PanelView<'_>, actions: &mut Vec<PanelAction>) {
    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .default_size([280.0, 360.0])
        .show(ctx, |ui| {
            ui.heading("Fractal Explorer");
            ui.separator();

            ui.horizontal(|ui| {
                for &kind in FractalKind::ALL {
                    if ui.selectable_label(view.kind == kind, kind.display_name()).clicked()
                        && view.kind != kind
                    {
                        actions.push(PanelAction::SetKind(kind));
                    }
                }
            });

            ui.separator();
            match view.kind {
                FractalKind::Mandelbrot => mandelbrot_section(ui, actions),
                FractalKind::Julia => julia_section(ui, view, actions),
            }
            animation_section(ui, view, actions);

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Max iterations:");
                let mut max_iterations = view.max_iterations;
                if ui
                    .add(egui::Slider::new(&mut max_iterations, ITERATION_RANGE))
                    .changed()
                {
                    actions.push(PanelAction::SetMaxIterations(max_iterations));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Colour scheme:");
                egui::ComboBox::from_id_source("colour_scheme")
                    .selected_text(view.scheme.display_name())
                    .show_ui(ui, |ui| {
                        for &scheme in ColourScheme::ALL {
                            if ui
                                .selectable_label(view.scheme == scheme, scheme.display_name())
                                .clicked()
                            {
                                actions.push(PanelAction::SetScheme(scheme));
                            }
                        }
                    });
            });

            ui.horizontal(|ui| {
                if ui.button("Zoom out").clicked() {
                    actions.push(PanelAction::ZoomOut);
                }
                if ui.button("Reset view").clicked() {
                    actions.push(PanelAction::Reset);
                }
            });

            ui.separator();
            ui.label(format!("Center: {:.6} {:+.6}i", view.center.re, view.center.im));
            ui.label(format!("Zoom: {:.2e}x (history {})", view.zoom, view.history_depth));
            ui.label(format!("Frame: {}", view.generation));
            if let Some(render_duration) = view.last_render_duration {
                ui.label(format!("Last render: {} ms", render_duration.as_millis()));
            }
            ui.small("Click the image to zoom in");

            if let Some(message) = view.last_error_message {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        });
}

fn mandelbrot_section(ui: &mut egui::Ui, actions: &mut Vec<PanelAction>) {
    ui.label("Locations:");
    ui.horizontal_wrapped(|ui| {
        for preset in MANDELBROT_LOCATIONS {
            if ui.button(preset.name).clicked() {
                actions.push(PanelAction::LoadLocation(preset));
            }
        }
    });
}

fn julia_section(ui: &mut egui::Ui, view: &PanelView<'_>, actions: &mut Vec<PanelAction>) {
    let sweeping = view.animating && view.animation_mode == AnimationMode::JuliaSweep;
    ui.add_enabled_ui(!sweeping, |ui| {
        let mut c = view.julia_constant;
        ui.horizontal(|ui| {
            ui.label("c =");
            let re = ui.add(egui::DragValue::new(&mut c.re).speed(0.001).fixed_decimals(4));
            let im = ui.add(egui::DragValue::new(&mut c.im).speed(0.001).fixed_decimals(4));
            ui.label("i");
            if re.changed() || im.changed() {
                actions.push(PanelAction::SetJuliaConstant(c));
            }
        });

        ui.horizontal_wrapped(|ui| {
            for preset in JULIA_PRESETS {
                if ui.button(preset.name).clicked() {
                    actions.push(PanelAction::LoadJuliaPreset(preset));
                }
            }
        });
    });
}

fn animation_section(ui: &mut egui::Ui, view: &PanelView<'_>, actions: &mut Vec<PanelAction>) {
    ui.horizontal(|ui| {
        ui.label("Animation:");
        for &mode in AnimationMode::ALL {
            if ui
                .selectable_label(view.animation_mode == mode, mode.display_name())
                .clicked()
                && view.animation_mode != mode
            {
                actions.push(PanelAction::SetAnimationMode(mode));
            }
        }
    });

    ui.horizontal(|ui| {
        let label = if view.animating {
            "Stop animation"
        } else {
            "Animate"
        };
        if ui.button(label).clicked() {
            actions.push(PanelAction::ToggleAnimation);
        }

        if view.animating {
            let mut speed = view.animation_speed;
            if ui
                .add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).text("speed"))
                .changed()
            {
                actions.push(PanelAction::SetAnimationSpeed(speed));
            }
        }
    });
}
