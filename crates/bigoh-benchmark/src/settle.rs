//! Pre-measurement settle hints.
//!
//! A settle hint runs right before the clock starts. It asks the
//! environment to finish pending background work so that work is not
//! billed to the measured run. It is advisory only: nothing here can
//! guarantee a quiet machine, and Rust has no collector to trigger. Timings
//! taken without a meaningful hook carry more noise, which the
//! repeated-minimum in [`crate::RobustTimer`] absorbs.

/// Best-effort hook invoked before each timed sample.
pub trait SettleHint {
    fn settle(&mut self);
}

impl<H: SettleHint + ?Sized> SettleHint for &mut H {
    fn settle(&mut self) {
        (**self).settle();
    }
}

/// Does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSettle;

impl SettleHint for NoSettle {
    fn settle(&mut self) {}
}

/// Yields the thread so pending scheduler work runs before the clock starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YieldSettle;

impl SettleHint for YieldSettle {
    fn settle(&mut self) {
        std::thread::yield_now();
    }
}

/// Runtime choice between the built-in hints.
///
/// # Example
///
/// ```
/// use bigoh_benchmark::{Settle, SettleHint};
///
/// let mut hint = Settle::Yield;
/// hint.settle();
/// assert_eq!(Settle::default(), Settle::None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Settle {
    #[default]
    None,
    Yield,
}

impl SettleHint for Settle {
    fn settle(&mut self) {
        match self {
            Settle::None => NoSettle.settle(),
            Settle::Yield => YieldSettle.settle(),
        }
    }
}
