use crate::builtins::booleans::{and, create_boolean};
use crate::builtins::numbers::{create_number, number_equals, same_type};
use crate::builtins::strings::create_string;
use crate::call::dispatch::invoke_unary;
use crate::constants::{
    ATTR_CURRENT, ATTR_MAX, ATTR_MIN, ATTR_VALUE, METHOD_CURRENT, METHOD_EQUALS, METHOD_NEXT,
    METHOD_TO_STRING, PROTO_ITERABLE, TYPE_RANGE,
};
use crate::error::RtResult;
use crate::heap;
use crate::object::accessors::{number_value, object_attr, string_value};
use crate::object::builders::base_record;
use crate::object::{AttrValue, MethodSlot, ObjectRef, replace_attribute};

/// A half-open `[min, max)` interval over Numbers, tagged Iterable. The
/// cursor starts one below `min` and is a full Number object mutated in
/// place, so a range is single-pass like a vector.
pub fn create_range(min: ObjectRef, max: ObjectRef) -> RtResult<ObjectRef> {
    let start = number_value(min)? - 1.0;
    let mut record = base_record();
    record.ancestry.insert(0, TYPE_RANGE.into());
    record.protocols.push(PROTO_ITERABLE.into());
    record.attrs.insert(ATTR_MIN, AttrValue::Object(min));
    record.attrs.insert(ATTR_MAX, AttrValue::Object(max));
    record
        .attrs
        .insert(ATTR_CURRENT, AttrValue::Object(create_number(start)));
    record.methods.push(MethodSlot::unary(
        TYPE_RANGE,
        METHOD_NEXT,
        range_next,
    ));
    record.methods.push(MethodSlot::unary(
        TYPE_RANGE,
        METHOD_CURRENT,
        range_current,
    ));
    record.methods.push(MethodSlot::unary(
        TYPE_RANGE,
        METHOD_TO_STRING,
        range_to_string,
    ));
    record.methods.push(MethodSlot::binary(
        TYPE_RANGE,
        METHOD_EQUALS,
        range_equals,
    ));
    Ok(heap::alloc_seeded(record))
}

/// The upper bound is truncated toward zero before the check, so a
/// fractional `max` stops at its integer part.
pub(crate) fn range_next(obj: ObjectRef) -> RtResult<ObjectRef> {
    let max = number_value(object_attr(obj, ATTR_MAX)?)?;
    let cursor = object_attr(obj, ATTR_CURRENT)?;
    let current = number_value(cursor)?;
    if current + 1.0 < max.trunc() {
        replace_attribute(cursor, ATTR_VALUE, AttrValue::Number(current + 1.0))?;
        return Ok(create_boolean(true));
    }
    Ok(create_boolean(false))
}

/// The cursor Number itself, not a copy.
pub(crate) fn range_current(obj: ObjectRef) -> RtResult<ObjectRef> {
    object_attr(obj, ATTR_CURRENT)
}

pub(crate) fn range_to_string(obj: ObjectRef) -> RtResult<ObjectRef> {
    let min = string_value(invoke_unary(object_attr(obj, ATTR_MIN)?, METHOD_TO_STRING)?)?;
    let max = string_value(invoke_unary(object_attr(obj, ATTR_MAX)?, METHOD_TO_STRING)?)?;
    Ok(create_string(&format!("[{min} - {max}]")))
}

/// Bounds only; cursor state is ignored.
pub(crate) fn range_equals(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    if !same_type(lhs, rhs)? {
        return Ok(create_boolean(false));
    }
    let mins = number_equals(object_attr(lhs, ATTR_MIN)?, object_attr(rhs, ATTR_MIN)?)?;
    let maxes = number_equals(object_attr(lhs, ATTR_MAX)?, object_attr(rhs, ATTR_MAX)?)?;
    and(mins, maxes)
}
