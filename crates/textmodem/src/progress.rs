//! Advisory progress notifications.
//!
//! The parser holds its delegate weakly: dropping the last strong reference
//! simply silences reporting. Reports within a session never go backwards.

use alloc::rc::{Rc, Weak};
use core::{cell::RefCell, fmt};

use tracing::trace;

/// A one-way sink for "processed so far / expected in total" notifications.
///
/// `expected_total` is `0` when the total is unknown.
pub trait ProgressReport {
    fn report(&mut self, processed: u64, expected_total: u64);
}

/// Weak attachment point for a [`ProgressReport`] delegate.
#[derive(Default)]
pub(crate) struct ProgressHandle {
    delegate: Option<Weak<RefCell<dyn ProgressReport>>>,
    last_processed: u64,
}

impl fmt::Debug for ProgressHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressHandle")
            .field("attached", &self.delegate.is_some())
            .field("last_processed", &self.last_processed)
            .finish()
    }
}

impl ProgressHandle {
    pub(crate) fn attach(&mut self, delegate: &Rc<RefCell<dyn ProgressReport>>) {
        self.delegate = Some(Rc::downgrade(delegate));
    }

    pub(crate) fn detach(&mut self) {
        self.delegate = None;
    }

    pub(crate) fn report(&mut self, processed: u64, expected_total: u64) {
        if processed < self.last_processed {
            trace!(
                processed,
                last = self.last_processed,
                "dropping out-of-order progress report"
            );
            return;
        }

        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return;
        };

        // A delegate that re-enters the parser while reporting is already
        // borrowed; skip rather than panic.
        let Ok(mut delegate) = delegate.try_borrow_mut() else {
            trace!(processed, "progress delegate busy, skipping report");
            return;
        };

        delegate.report(processed, expected_total);
        self.last_processed = processed;
    }
}
