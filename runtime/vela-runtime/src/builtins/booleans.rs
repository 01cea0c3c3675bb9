use crate::builtins::numbers::same_type;
use crate::builtins::strings::create_string;
use crate::constants::{ATTR_VALUE, METHOD_EQUALS, METHOD_TO_STRING, TYPE_BOOLEAN};
use crate::error::RtResult;
use crate::heap;
use crate::object::accessors::bool_value;
use crate::object::builders::base_record;
use crate::object::{AttrValue, MethodSlot, ObjectRef};

pub fn create_boolean(value: bool) -> ObjectRef {
    let mut record = base_record();
    record.ancestry.insert(0, TYPE_BOOLEAN.into());
    record.attrs.insert(ATTR_VALUE, AttrValue::Bool(value));
    record.methods.push(MethodSlot::unary(
        TYPE_BOOLEAN,
        METHOD_TO_STRING,
        boolean_to_string,
    ));
    record.methods.push(MethodSlot::binary(
        TYPE_BOOLEAN,
        METHOD_EQUALS,
        boolean_equals,
    ));
    heap::alloc_seeded(record)
}

pub(crate) fn boolean_to_string(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_string(if bool_value(obj)? {
        "true"
    } else {
        "false"
    }))
}

/// Equality of the backing value cell, not of the truth value: two
/// independently constructed `true`s compare unequal, aliases compare
/// equal. See DESIGN.md D2 before changing this.
pub(crate) fn boolean_equals(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    if !same_type(lhs, rhs)? {
        return Ok(create_boolean(false));
    }
    Ok(create_boolean(heap::same_store(lhs, rhs)?))
}

pub fn not(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(!bool_value(obj)?))
}

/// Eager conjunction: both operands were already evaluated by the caller.
pub fn and(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(bool_value(lhs)? && bool_value(rhs)?))
}

/// Eager disjunction.
pub fn or(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(bool_value(lhs)? || bool_value(rhs)?))
}
