//! Typed payload readers. Each one copies the payload out under the heap
//! lock and reports `AttributeNotFound` / `PayloadMismatch` instead of the
//! unchecked casts the attribute table itself cannot rule out.

use crate::constants::ATTR_VALUE;
use crate::error::{RtResult, RuntimeError};

use super::{AttrValue, ObjectRef, lookup_attribute};

fn required(obj: ObjectRef, key: &str) -> RtResult<AttrValue> {
    lookup_attribute(obj, key)?.ok_or_else(|| RuntimeError::attribute_not_found(key))
}

/// The `value` payload of a Number.
pub fn number_value(obj: ObjectRef) -> RtResult<f64> {
    match required(obj, ATTR_VALUE)? {
        AttrValue::Number(value) => Ok(value),
        _ => Err(RuntimeError::payload_mismatch(ATTR_VALUE, "a number")),
    }
}

/// The `value` payload of a Boolean.
pub fn bool_value(obj: ObjectRef) -> RtResult<bool> {
    match required(obj, ATTR_VALUE)? {
        AttrValue::Bool(value) => Ok(value),
        _ => Err(RuntimeError::payload_mismatch(ATTR_VALUE, "a boolean")),
    }
}

/// The `value` payload of a String, copied out.
pub fn string_value(obj: ObjectRef) -> RtResult<String> {
    match required(obj, ATTR_VALUE)? {
        AttrValue::Str(value) => Ok(value.into_string()),
        _ => Err(RuntimeError::payload_mismatch(ATTR_VALUE, "a string")),
    }
}

pub fn int_attr(obj: ObjectRef, key: &str) -> RtResult<i64> {
    match required(obj, key)? {
        AttrValue::Int(value) => Ok(value),
        _ => Err(RuntimeError::payload_mismatch(key, "an integer")),
    }
}

pub fn object_attr(obj: ObjectRef, key: &str) -> RtResult<ObjectRef> {
    match required(obj, key)? {
        AttrValue::Object(value) => Ok(value),
        _ => Err(RuntimeError::payload_mismatch(key, "an object")),
    }
}

/// Copies the element references of a `list` payload so the caller can
/// dispatch on them without holding the heap.
pub fn list_snapshot(obj: ObjectRef, key: &str) -> RtResult<Vec<ObjectRef>> {
    match required(obj, key)? {
        AttrValue::List(elements) => Ok(elements.into_vec()),
        _ => Err(RuntimeError::payload_mismatch(key, "an element list")),
    }
}
