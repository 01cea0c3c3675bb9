mod metrics;

pub use metrics::profile_counters;
pub(crate) use metrics::{ALLOC_COUNT, DISPATCH_COUNT, RESEAT_COUNT, profile_hit};

use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::heap::Heap;

pub(crate) struct RuntimeState {
    pub(crate) heap: RwLock<Heap>,
}

static RUNTIME_STATE: Lazy<RuntimeState> = Lazy::new(|| RuntimeState {
    heap: RwLock::new(Heap::with_capacity(heap_reserve())),
});

pub(crate) fn runtime_state() -> &'static RuntimeState {
    &RUNTIME_STATE
}

/// Arena pre-sizing, read once. Zero means grow on demand.
fn heap_reserve() -> usize {
    std::env::var("VELA_HEAP_RESERVE")
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or(0)
}
