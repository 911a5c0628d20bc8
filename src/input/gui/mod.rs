//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for UI controls.

pub mod actions;
mod app;
pub mod commands;
pub mod errors;
mod panel;
pub mod ports;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
