//! Object-cell and store arenas. Cells are addressed by generational
//! handles and live until explicitly released; stores are shared records
//! counted by the cells seated on them and freed when the last seat leaves.
//!
//! Every function here takes and releases the heap lock itself. Callers
//! must not re-enter the heap from inside the closures passed to
//! `with_store`/`with_store_mut`; copy data out and dispatch afterwards.

use log::debug;
use vela_obj_model::{Handle, HandleArena};

use crate::error::{RtResult, RuntimeError};
use crate::object::{ObjectCell, ObjectRef, StoreRecord};
use crate::state::{ALLOC_COUNT, RESEAT_COUNT, profile_hit, runtime_state};

pub(crate) struct Heap {
    cells: HandleArena<ObjectCell>,
    stores: HandleArena<StoreRecord>,
}

impl Heap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HandleArena::with_capacity(capacity),
            stores: HandleArena::with_capacity(capacity),
        }
    }

    fn release_store_ref(&mut self, handle: Handle) {
        let now_unreferenced = match self.stores.get_mut(handle) {
            Some(store) => {
                store.refs -= 1;
                store.refs == 0
            }
            None => false,
        };
        if now_unreferenced {
            self.stores.remove(handle);
            debug!("store {:#x} freed", handle.bits());
        }
    }
}

/// Allocates a cell with no backing store, the shell `duplicate_binding`
/// and the lowering of uninitialized bindings start from.
pub fn new_empty_object() -> ObjectRef {
    profile_hit(&ALLOC_COUNT);
    let mut heap = runtime_state().heap.write().unwrap();
    ObjectRef::from_handle(heap.cells.insert(ObjectCell { store: None }))
}

/// Seats a fresh cell on `record`. Constructors build the record first and
/// hand it over whole, so a half-installed object is never observable.
pub(crate) fn alloc_seeded(mut record: StoreRecord) -> ObjectRef {
    profile_hit(&ALLOC_COUNT);
    record.refs = 1;
    let mut heap = runtime_state().heap.write().unwrap();
    let store = heap.stores.insert(record);
    ObjectRef::from_handle(heap.cells.insert(ObjectCell {
        store: Some(store),
    }))
}

/// Makes `target` alias `source`'s store; `source` is unaffected. This is
/// the sole assignment primitive: a binding cell is reseated, never
/// replaced, so every other holder of the cell observes the update.
/// Returns `target`.
pub fn reseat(target: ObjectRef, source: ObjectRef) -> RtResult<ObjectRef> {
    profile_hit(&RESEAT_COUNT);
    let mut heap = runtime_state().heap.write().unwrap();
    let source_store = heap
        .cells
        .get(source.handle())
        .ok_or(RuntimeError::DanglingHandle {
            bits: source.bits(),
        })?
        .store
        .ok_or(RuntimeError::MissingStore)?;
    let old = heap
        .cells
        .get(target.handle())
        .ok_or(RuntimeError::DanglingHandle {
            bits: target.bits(),
        })?
        .store;
    // Retain before releasing so reseating an alias onto itself stays live.
    heap.stores
        .get_mut(source_store)
        .ok_or(RuntimeError::DanglingHandle {
            bits: source_store.bits(),
        })?
        .refs += 1;
    if let Some(cell) = heap.cells.get_mut(target.handle()) {
        cell.store = Some(source_store);
    }
    if let Some(old_store) = old {
        heap.release_store_ref(old_store);
    }
    Ok(target)
}

/// Fresh shell aliasing `source`'s store: an independently reseatable
/// binding cell that initially shares the source's representation.
pub fn duplicate_binding(source: ObjectRef) -> RtResult<ObjectRef> {
    let cell = new_empty_object();
    reseat(cell, source)?;
    Ok(cell)
}

/// Explicitly destroys a cell. Its store survives while other cells are
/// seated on it.
pub fn release_object(obj: ObjectRef) -> RtResult<()> {
    let mut heap = runtime_state().heap.write().unwrap();
    let cell = heap
        .cells
        .remove(obj.handle())
        .ok_or(RuntimeError::DanglingHandle { bits: obj.bits() })?;
    if let Some(store) = cell.store {
        heap.release_store_ref(store);
    }
    Ok(())
}

/// True iff both cells are seated on the same store.
pub fn same_store(a: ObjectRef, b: ObjectRef) -> RtResult<bool> {
    let heap = runtime_state().heap.read().unwrap();
    let store_a = heap
        .cells
        .get(a.handle())
        .ok_or(RuntimeError::DanglingHandle { bits: a.bits() })?
        .store;
    let store_b = heap
        .cells
        .get(b.handle())
        .ok_or(RuntimeError::DanglingHandle { bits: b.bits() })?
        .store;
    Ok(match (store_a, store_b) {
        (Some(sa), Some(sb)) => sa == sb,
        _ => false,
    })
}

pub(crate) fn with_store<R>(
    obj: ObjectRef,
    f: impl FnOnce(&StoreRecord) -> RtResult<R>,
) -> RtResult<R> {
    let heap = runtime_state().heap.read().unwrap();
    let cell = heap
        .cells
        .get(obj.handle())
        .ok_or(RuntimeError::DanglingHandle { bits: obj.bits() })?;
    let store = cell.store.ok_or(RuntimeError::MissingStore)?;
    let record = heap
        .stores
        .get(store)
        .ok_or(RuntimeError::DanglingHandle {
            bits: store.bits(),
        })?;
    f(record)
}

pub(crate) fn with_store_mut<R>(
    obj: ObjectRef,
    f: impl FnOnce(&mut StoreRecord) -> RtResult<R>,
) -> RtResult<R> {
    let mut heap = runtime_state().heap.write().unwrap();
    let cell = heap
        .cells
        .get(obj.handle())
        .ok_or(RuntimeError::DanglingHandle { bits: obj.bits() })?;
    let store = cell.store.ok_or(RuntimeError::MissingStore)?;
    let record = heap
        .stores
        .get_mut(store)
        .ok_or(RuntimeError::DanglingHandle {
            bits: store.bits(),
        })?;
    f(record)
}

#[cfg(test)]
pub(crate) fn store_is_live(obj: ObjectRef) -> bool {
    let heap = runtime_state().heap.read().unwrap();
    heap.cells
        .get(obj.handle())
        .and_then(|cell| cell.store)
        .map(|store| heap.stores.contains(store))
        .unwrap_or(false)
}
