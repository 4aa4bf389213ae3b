//! Interruption handler.

use marina_core::utils::Quota;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

static SHOULD_INTERRUPT: AtomicBool = AtomicBool::new(false);
static SET_HANDLER: Once = Once::new();

/// Creates a quota which is reached once the process receives Ctrl-C (or termination) signal.
/// Strategies stop placing boats and the run returns partial results.
pub fn create_interruption_quota() -> InterruptionQuota {
    SET_HANDLER.call_once(|| {
        if let Err(err) = ctrlc::set_handler(|| SHOULD_INTERRUPT.store(true, Ordering::Relaxed)) {
            eprintln!("cannot set interruption handler: '{err}'");
        }
    });

    InterruptionQuota {}
}

/// A quota which is reached when the process is interrupted.
pub struct InterruptionQuota {}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        SHOULD_INTERRUPT.load(Ordering::Relaxed)
    }
}
