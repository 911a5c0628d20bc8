pub mod frame;
pub mod render_job;
pub mod view_snapshot;
