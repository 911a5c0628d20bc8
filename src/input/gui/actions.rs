use crate::controllers::interactive::{
    AnimationMode, AnimationScheduler, Explorer, ExplorerError, Interaction,
};
use crate::core::colour_schemes::ColourScheme;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::presets::{JuliaPreset, LocationPreset};
use num_complex::Complex64;

/// Something the user asked for through the window or the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    ClickZoom { x: f64, y: f64 },
    ZoomOut,
    Reset,
    SetKind(FractalKind),
    LoadLocation(&'static LocationPreset),
    LoadJuliaPreset(&'static JuliaPreset),
    SetJuliaConstant(Complex64),
    SetMaxIterations(u32),
    SetScheme(ColourScheme),
    ToggleAnimation,
    SetAnimationMode(AnimationMode),
    SetAnimationSpeed(f64),
}

/// Routes one action to the explorer or the animation scheduler.
///
/// Animation controls never touch the view, so they always apply.
pub fn apply_action(
    explorer: &mut Explorer,
    animation: &mut AnimationScheduler,
    action: PanelAction,
) -> Result<Interaction, ExplorerError> {
    match action {
        PanelAction::ClickZoom { x, y } => explorer.click_zoom(x, y),
        PanelAction::ZoomOut => explorer.zoom_out(),
        PanelAction::Reset => explorer.reset(),
        PanelAction::SetKind(kind) => {
            if kind != explorer.kind() {
                animation.stop();
            }
            explorer.set_fractal_kind(kind)
        }
        PanelAction::LoadLocation(preset) => {
            animation.stop();
            explorer.load_location(preset)
        }
        PanelAction::LoadJuliaPreset(preset) => explorer.load_julia_preset(preset),
        PanelAction::SetJuliaConstant(c) => explorer.set_julia_constant(c),
        PanelAction::SetMaxIterations(max_iterations) => explorer.set_max_iterations(max_iterations),
        PanelAction::SetScheme(scheme) => Ok(explorer.set_colour_scheme(scheme)),
        PanelAction::ToggleAnimation => {
            if animation.is_active() {
                animation.stop();
            } else {
                animation.start();
            }
            Ok(Interaction::Applied)
        }
        PanelAction::SetAnimationMode(mode) => {
            animation.set_mode(mode);
            Ok(Interaction::Applied)
        }
        PanelAction::SetAnimationSpeed(speed) => {
            animation.set_speed(speed);
            Ok(Interaction::Applied)
        }
    }
}
