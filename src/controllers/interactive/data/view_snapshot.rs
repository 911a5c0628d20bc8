use num_complex::Complex64;

/// Entry on the zoom history stack.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub center: Complex64,
    pub zoom: f64,
}
