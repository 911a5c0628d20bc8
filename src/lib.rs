pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::cli::{CliRenderController, ConfigError, RenderArgs, RenderConfig, RenderSettings};
pub use controllers::interactive::{
    AnimationMode, AnimationScheduler, Explorer, Frame, Interaction, TickAction,
};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render::{ChunkedRender, RenderError, render, render_cancelable, render_into};
pub use crate::core::colour_schemes::{ColourScheme, colourize};
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::params::{FractalParams, ParamsError};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
