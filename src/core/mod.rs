pub mod actions;
pub mod colour_schemes;
pub mod data;
pub mod fractals;
