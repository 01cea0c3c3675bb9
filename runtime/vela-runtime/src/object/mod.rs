use std::fmt;

use vela_obj_model::Handle;

pub(crate) mod accessors;
pub(crate) mod builders;
pub(crate) mod table;

pub use table::AttributeTable;

use crate::error::{RtResult, RuntimeError};
use crate::heap;

/// Reference to an object cell. Copyable and comparable: two refs are equal
/// iff they name the same cell, which is the identity the universal
/// `equals` compares. Aliased cells (after `reseat`) share a store but stay
/// distinct references.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef(Handle);

impl ObjectRef {
    pub(crate) fn from_handle(handle: Handle) -> Self {
        Self(handle)
    }

    pub(crate) fn handle(self) -> Handle {
        self.0
    }

    pub fn bits(self) -> u64 {
        self.0.bits()
    }
}

pub type UnaryFn = fn(ObjectRef) -> RtResult<ObjectRef>;
pub type BinaryFn = fn(ObjectRef, ObjectRef) -> RtResult<ObjectRef>;

/// A method implementation with its arity checked at the call site.
#[derive(Copy, Clone)]
pub enum MethodFn {
    Unary(UnaryFn),
    Binary(BinaryFn),
}

impl MethodFn {
    pub fn call1(self, recv: ObjectRef) -> RtResult<ObjectRef> {
        match self {
            MethodFn::Unary(func) => func(recv),
            MethodFn::Binary(_) => Err(RuntimeError::ArityMismatch {
                expected: 2,
                got: 1,
            }),
        }
    }

    pub fn call2(self, recv: ObjectRef, arg: ObjectRef) -> RtResult<ObjectRef> {
        match self {
            MethodFn::Binary(func) => func(recv, arg),
            MethodFn::Unary(_) => Err(RuntimeError::ArityMismatch {
                expected: 1,
                got: 2,
            }),
        }
    }
}

impl fmt::Debug for MethodFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFn::Unary(func) => write!(f, "Unary({:p})", *func as *const ()),
            MethodFn::Binary(func) => write!(f, "Binary({:p})", *func as *const ()),
        }
    }
}

/// An attribute payload. Data fields only; methods, ancestry and protocol
/// tags live in their own typed tables on the store.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Int(i64),
    Bool(bool),
    Str(Box<str>),
    Object(ObjectRef),
    List(Box<[ObjectRef]>),
}

#[derive(Debug)]
pub(crate) struct MethodSlot {
    pub(crate) owner: Box<str>,
    pub(crate) name: Box<str>,
    pub(crate) func: MethodFn,
}

impl MethodSlot {
    pub(crate) fn unary(owner: &str, name: &str, func: UnaryFn) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            func: MethodFn::Unary(func),
        }
    }

    pub(crate) fn binary(owner: &str, name: &str, func: BinaryFn) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            func: MethodFn::Binary(func),
        }
    }
}

/// The shared record a cell is seated on. Reseating moves a cell between
/// records wholesale, so the type identity (ancestry, protocols, methods)
/// travels together with the data fields.
#[derive(Debug)]
pub(crate) struct StoreRecord {
    pub(crate) attrs: AttributeTable,
    pub(crate) ancestry: Vec<Box<str>>,
    pub(crate) protocols: Vec<Box<str>>,
    pub(crate) methods: Vec<MethodSlot>,
    pub(crate) refs: u32,
}

impl StoreRecord {
    pub(crate) fn new() -> Self {
        Self {
            attrs: AttributeTable::new(),
            ancestry: Vec::new(),
            protocols: Vec::new(),
            methods: Vec::new(),
            refs: 0,
        }
    }

    pub(crate) fn find_method(&self, owner: &str, name: &str) -> Option<MethodFn> {
        self.methods
            .iter()
            .find(|slot| slot.owner.as_ref() == owner && slot.name.as_ref() == name)
            .map(|slot| slot.func)
    }
}

/// An object cell: nothing but a (possibly absent) seat on a store.
#[derive(Debug)]
pub(crate) struct ObjectCell {
    pub(crate) store: Option<Handle>,
}

pub fn insert_attribute(obj: ObjectRef, key: &str, value: AttrValue) -> RtResult<()> {
    heap::with_store_mut(obj, |store| {
        store.attrs.insert(key, value);
        Ok(())
    })
}

pub fn lookup_attribute(obj: ObjectRef, key: &str) -> RtResult<Option<AttrValue>> {
    heap::with_store(obj, |store| Ok(store.attrs.lookup(key).cloned()))
}

/// Requires the key to be present already; this is the cursor-slot
/// mutation primitive, not an upsert.
pub fn replace_attribute(obj: ObjectRef, key: &str, value: AttrValue) -> RtResult<()> {
    heap::with_store_mut(obj, |store| store.attrs.replace(key, value))
}

pub fn remove_attribute(obj: ObjectRef, key: &str) -> RtResult<()> {
    heap::with_store_mut(obj, |store| {
        store.attrs.remove(key);
        Ok(())
    })
}

/// Appends a tag to the receiver's ancestry. Tags are ordered most-derived
/// first; constructors push the root `Object` tag last.
pub fn push_ancestor(obj: ObjectRef, tag: &str) -> RtResult<()> {
    heap::with_store_mut(obj, |store| {
        store.ancestry.push(tag.into());
        Ok(())
    })
}

pub fn add_protocol(obj: ObjectRef, tag: &str) -> RtResult<()> {
    heap::with_store_mut(obj, |store| {
        store.protocols.push(tag.into());
        Ok(())
    })
}

/// Installs a method under an owner tag. The owner must already be in the
/// receiver's ancestry; that is the construction-time type check that
/// replaces free-form name formatting.
pub fn install_method(obj: ObjectRef, owner: &str, name: &str, func: MethodFn) -> RtResult<()> {
    heap::with_store_mut(obj, |store| {
        if !store.ancestry.iter().any(|tag| tag.as_ref() == owner) {
            return Err(RuntimeError::unknown_ancestor(owner));
        }
        store.methods.push(MethodSlot {
            owner: owner.into(),
            name: name.into(),
            func,
        });
        Ok(())
    })
}
