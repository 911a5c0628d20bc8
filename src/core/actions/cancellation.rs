use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// A render abandoned before `row` was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render cancelled before row {row}")]
pub struct Cancelled {
    pub row: u32,
}

/// Asked before each row is drawn whether the render should stop there.
///
/// Parallel renders visit rows in no particular order, so a token may be
/// asked about row 40 before row 3.
pub trait CancelToken: Send + Sync {
    fn stop_before(&self, row: u32) -> bool;

    fn check(&self, row: u32) -> Result<(), Cancelled> {
        if self.stop_before(row) {
            Err(Cancelled { row })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn stop_before(&self, _row: u32) -> bool {
        false
    }
}

/// Cloneable switch for stopping a render from another thread. Rows already
/// in flight finish; no new row starts once it is raised.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn stop_before(&self, _row: u32) -> bool {
        self.is_raised()
    }
}

impl<F> CancelToken for F
where
    F: Fn(u32) -> bool + Send + Sync,
{
    #[inline]
    fn stop_before(&self, row: u32) -> bool {
        self(row)
    }
}
