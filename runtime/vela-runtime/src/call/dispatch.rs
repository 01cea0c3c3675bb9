//! Method resolution over the ancestry chain, and the two capability
//! queries. Absence of a method after walking the whole chain is a normal
//! outcome; only the `invoke_*` helpers turn it into an error, because
//! their callers asserted presence.

use log::trace;

use crate::error::{RtResult, RuntimeError};
use crate::heap;
use crate::object::{MethodFn, ObjectRef};
use crate::state::{DISPATCH_COUNT, profile_hit};

/// The dynamic type: the most-derived ancestry tag, if the object has one.
pub fn type_of(obj: ObjectRef) -> RtResult<Option<String>> {
    heap::with_store(obj, |store| {
        Ok(store.ancestry.first().map(|tag| tag.to_string()))
    })
}

/// Walks the ancestry in order and returns the first implementation of
/// `name`. With `resume_from`, tags are skipped until the named ancestor is
/// reached; the search then starts at that ancestor (inclusive), which is
/// how generated code dispatches to an overridden base method. A
/// `resume_from` that never appears in the chain resolves to `None`.
pub fn resolve_method(
    obj: ObjectRef,
    name: &str,
    resume_from: Option<&str>,
) -> RtResult<Option<MethodFn>> {
    profile_hit(&DISPATCH_COUNT);
    heap::with_store(obj, |store| {
        let mut active = resume_from.is_none();
        for tag in &store.ancestry {
            if !active {
                if resume_from == Some(tag.as_ref()) {
                    active = true;
                } else {
                    continue;
                }
            }
            if let Some(func) = store.find_method(tag, name) {
                trace!("resolved {tag}::{name}");
                return Ok(Some(func));
            }
        }
        trace!("no implementation of {name}");
        Ok(None)
    })
}

/// True iff `tag` appears anywhere in the ancestry.
pub fn is_type(obj: ObjectRef, tag: &str) -> RtResult<bool> {
    heap::with_store(obj, |store| {
        Ok(store.ancestry.iter().any(|entry| entry.as_ref() == tag))
    })
}

/// True iff `tag` was declared as a protocol. Purely declarative: it says
/// nothing about which methods actually resolve, so callers relying on a
/// protocol still resolve the methods they need and handle absence.
pub fn is_protocol(obj: ObjectRef, tag: &str) -> RtResult<bool> {
    heap::with_store(obj, |store| {
        Ok(store.protocols.iter().any(|entry| entry.as_ref() == tag))
    })
}

/// Resolves and calls a unary method, treating absence as an error.
pub fn invoke_unary(obj: ObjectRef, name: &str) -> RtResult<ObjectRef> {
    let method =
        resolve_method(obj, name, None)?.ok_or_else(|| RuntimeError::attribute_not_found(name))?;
    method.call1(obj)
}

/// Resolves and calls a binary method, treating absence as an error.
pub fn invoke_binary(obj: ObjectRef, name: &str, arg: ObjectRef) -> RtResult<ObjectRef> {
    let method =
        resolve_method(obj, name, None)?.ok_or_else(|| RuntimeError::attribute_not_found(name))?;
    method.call2(obj, arg)
}
