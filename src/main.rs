use anyhow::Context;
use clap::Parser;
use fractal_canvas::{CliRenderController, PpmFilePresenter, RenderArgs};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = RenderArgs::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.to_config().context("failed to load configuration")?;
    let settings = config.build().context("invalid render settings")?;

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    let duration = controller.generate(&settings);
    controller
        .write(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        elapsed_ms = duration.as_millis() as u64,
        "done"
    );

    Ok(())
}
