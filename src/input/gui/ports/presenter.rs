use crate::controllers::interactive::Frame;
use egui::Context as EguiContext;

pub trait GuiPresenterPort {
    /// Stores a finished frame for display. Stale or mis-sized frames are dropped.
    fn present_frame(&mut self, frame: &Frame);
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
