use crate::builtins::booleans::create_boolean;
use crate::builtins::numbers::{create_number, same_type};
use crate::constants::{
    ATTR_LEN, ATTR_VALUE, METHOD_EQUALS, METHOD_SIZE, METHOD_TO_STRING, TYPE_STRING,
};
use crate::error::RtResult;
use crate::heap;
use crate::object::accessors::{int_attr, string_value};
use crate::object::builders::base_record;
use crate::object::{AttrValue, MethodSlot, ObjectRef};

/// An immutable string value with its length cached beside it.
pub fn create_string(text: &str) -> ObjectRef {
    let mut record = base_record();
    record.ancestry.insert(0, TYPE_STRING.into());
    record.attrs.insert(ATTR_VALUE, AttrValue::Str(text.into()));
    record
        .attrs
        .insert(ATTR_LEN, AttrValue::Int(text.len() as i64));
    record.methods.push(MethodSlot::unary(
        TYPE_STRING,
        METHOD_TO_STRING,
        string_to_string,
    ));
    record.methods.push(MethodSlot::binary(
        TYPE_STRING,
        METHOD_EQUALS,
        string_equals,
    ));
    record
        .methods
        .push(MethodSlot::unary(TYPE_STRING, METHOD_SIZE, string_size));
    heap::alloc_seeded(record)
}

/// Identity: a String renders as itself, not a copy.
pub(crate) fn string_to_string(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(obj)
}

pub(crate) fn string_equals(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    if !same_type(lhs, rhs)? {
        return Ok(create_boolean(false));
    }
    Ok(create_boolean(string_value(lhs)? == string_value(rhs)?))
}

pub(crate) fn string_size(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(int_attr(obj, ATTR_LEN)? as f64))
}

/// A fresh String sized to the sum of both lengths.
pub fn concat(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    let left = string_value(lhs)?;
    let right = string_value(rhs)?;
    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(&left);
    joined.push_str(&right);
    Ok(create_string(&joined))
}
