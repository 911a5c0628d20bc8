use crate::core::data::viewport::ViewportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface failed")]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
