// core/src/checkout/gate.rs

use crate::error::{CanteenError, CanteenResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one checkout per dashboard at a time.
///
/// Acquisition never waits: a second caller is turned away with
/// [`CanteenError::CheckoutInProgress`] so a double click cannot start two
/// overlapping submissions.
#[derive(Debug, Clone, Default)]
pub struct CheckoutGate {
  busy: Arc<AtomicBool>,
}

impl CheckoutGate {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn try_acquire(&self) -> CanteenResult<CheckoutPermit> {
    self
      .busy
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .map(|_| CheckoutPermit {
        busy: Arc::clone(&self.busy),
      })
      .map_err(|_| CanteenError::CheckoutInProgress)
  }

  pub fn is_busy(&self) -> bool {
    self.busy.load(Ordering::Acquire)
  }
}

/// Releases the gate when dropped, including on early return or panic.
#[derive(Debug)]
pub struct CheckoutPermit {
  busy: Arc<AtomicBool>,
}

impl Drop for CheckoutPermit {
  fn drop(&mut self) {
    self.busy.store(false, Ordering::Release);
  }
}
