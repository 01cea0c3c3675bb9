use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static PROFILE_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) static ALLOC_COUNT: AtomicU64 = AtomicU64::new(0);
pub(crate) static DISPATCH_COUNT: AtomicU64 = AtomicU64::new(0);
pub(crate) static RESEAT_COUNT: AtomicU64 = AtomicU64::new(0);

fn profile_enabled() -> bool {
    *PROFILE_ENABLED.get_or_init(|| {
        std::env::var("VELA_PROFILE")
            .map(|val| !val.is_empty() && val != "0")
            .unwrap_or(false)
    })
}

pub(crate) fn profile_hit(counter: &AtomicU64) {
    if profile_enabled() {
        counter.fetch_add(1, AtomicOrdering::Relaxed);
    }
}

/// Snapshot of (allocations, dispatches, reseats). All zero unless
/// `VELA_PROFILE` was set when the first counter was touched.
pub fn profile_counters() -> (u64, u64, u64) {
    (
        ALLOC_COUNT.load(AtomicOrdering::Relaxed),
        DISPATCH_COUNT.load(AtomicOrdering::Relaxed),
        RESEAT_COUNT.load(AtomicOrdering::Relaxed),
    )
}
