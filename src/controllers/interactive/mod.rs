//! Interactive exploration state.
//!
//! [`Explorer`] holds the current view and enforces that only one render runs
//! at a time: while a [`RenderJob`] is outstanding every request reports
//! [`Interaction::Ignored`]. [`AnimationScheduler`] sweeps the Julia constant
//! or bounces the zoom on top of the same rule.

pub mod animation;
pub mod data;
pub mod errors;
pub mod explorer;
pub mod state;

pub use animation::{
    AnimationMode, AnimationScheduler, TickAction, ZoomDirection, julia_constant_at, next_zoom,
};
pub use data::frame::Frame;
pub use data::render_job::RenderJob;
pub use data::view_snapshot::ViewSnapshot;
pub use errors::ExplorerError;
pub use explorer::{DEFAULT_MAX_ITERATIONS, Explorer, MIN_ZOOM};
pub use state::{Interaction, RenderState};
