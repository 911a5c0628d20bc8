use crate::core::data::viewport::ViewportError;
use crate::core::fractals::params::ParamsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Params(#[from] ParamsError),
}
