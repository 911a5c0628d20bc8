use crate::controllers::cli::config::RenderSettings;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::{ChunkedRender, render};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Renders a single frame and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, settings: &RenderSettings) -> Duration {
        let viewport = &settings.viewport;

        info!(
            kind = %settings.params.kind(),
            width = viewport.width(),
            height = viewport.height(),
            max_iterations = viewport.max_iterations(),
            scheme = %settings.scheme,
            "rendering"
        );

        let start = Instant::now();
        let buffer = match settings.chunk_rows {
            Some(chunk_rows) => {
                ChunkedRender::new(*viewport, settings.params, settings.scheme, chunk_rows)
                    .finish()
            }
            None => render(viewport, &settings.params, settings.scheme),
        };
        let duration = start.elapsed();

        info!(?duration, "render complete");
        self.buffer = Some(buffer);

        duration
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> io::Result<()> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| io::Error::other("nothing has been rendered yet"))?;

        self.presenter.present(buffer, filepath.as_ref())?;
        info!(path = %filepath.as_ref().display(), "wrote image");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::cli::config::RenderConfig;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, PixelBuffer)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.clone()));
            Ok(())
        }
    }

    fn small_settings(chunk_rows: Option<u32>) -> RenderSettings {
        RenderConfig {
            width: 24,
            height: 18,
            chunk_rows,
            ..RenderConfig::default()
        }
        .build()
        .unwrap()
    }

    #[test]
    fn write_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);

        assert!(controller.write("out.ppm").is_err());
        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn generate_then_write_presents_rendered_buffer() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter);

        controller.generate(&small_settings(None));
        controller.write("out.ppm").unwrap();

        let written = presenter.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out.ppm"));
        assert_eq!(written[0].1.width(), 24);
        assert_eq!(written[0].1.height(), 18);
    }

    #[test]
    fn chunked_and_whole_frame_renders_agree() {
        let presenter = RecordingPresenter::default();
        let mut whole = CliRenderController::new(&presenter);
        let mut chunked = CliRenderController::new(&presenter);

        whole.generate(&small_settings(None));
        chunked.generate(&small_settings(Some(5)));

        assert_eq!(whole.buffer(), chunked.buffer());
    }
}
