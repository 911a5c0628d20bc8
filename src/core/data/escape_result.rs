/// Outcome of iterating a single point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeResult {
    /// The orbit left the radius-2 disc after `iterations` steps. `smoothed`
    /// is the continuous iteration count used for colouring.
    Escaped { iterations: u32, smoothed: f64 },
    /// The orbit stayed bounded for the full iteration budget.
    Bounded,
}
