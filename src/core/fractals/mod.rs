pub mod fractal_kinds;
pub mod kernel;
pub mod params;
pub mod presets;
