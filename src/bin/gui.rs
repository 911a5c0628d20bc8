use fractal_canvas::{PixelsPresenterFactory, RunGuiCommand};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let command = RunGuiCommand::new(PixelsPresenterFactory {});
    command.execute()?;

    Ok(())
}
