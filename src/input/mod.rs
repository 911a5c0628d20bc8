//! Input adapters for the fractal explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into explorer requests.

#[cfg(feature = "gui")]
pub mod gui;
