pub mod args;
pub mod config;
pub mod controller;

pub use args::RenderArgs;
pub use config::{ConfigError, RenderConfig, RenderSettings};
pub use controller::CliRenderController;
