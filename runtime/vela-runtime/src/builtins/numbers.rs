use crate::builtins::booleans::create_boolean;
use crate::builtins::strings::create_string;
use crate::call::dispatch::type_of;
use crate::constants::{
    ATTR_VALUE, METHOD_EQUALS, METHOD_TO_STRING, NUMBER_EQ_EPSILON, TYPE_NUMBER,
};
use crate::error::{RtResult, RuntimeError};
use crate::heap;
use crate::object::accessors::{number_value, string_value};
use crate::object::builders::base_record;
use crate::object::{AttrValue, MethodSlot, ObjectRef};
use crate::utils::{format_double, scan_decimal};

pub fn create_number(value: f64) -> ObjectRef {
    let mut record = base_record();
    record.ancestry.insert(0, TYPE_NUMBER.into());
    record.attrs.insert(ATTR_VALUE, AttrValue::Number(value));
    record.methods.push(MethodSlot::unary(
        TYPE_NUMBER,
        METHOD_TO_STRING,
        number_to_string,
    ));
    record.methods.push(MethodSlot::binary(
        TYPE_NUMBER,
        METHOD_EQUALS,
        number_equals,
    ));
    heap::alloc_seeded(record)
}

pub(crate) fn number_to_string(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_string(&format_double(number_value(obj)?)))
}

/// Same dynamic type and values within 1e-9 of each other. A mismatched
/// type is an ordinary `false`, never an error.
pub(crate) fn number_equals(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    if !same_type(lhs, rhs)? {
        return Ok(create_boolean(false));
    }
    let close = (number_value(lhs)? - number_value(rhs)?).abs() < NUMBER_EQ_EPSILON;
    Ok(create_boolean(close))
}

pub(crate) fn same_type(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<bool> {
    Ok(match (type_of(lhs)?, type_of(rhs)?) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    })
}

/// Arithmetic is pure: every operation allocates a fresh Number.
pub fn add(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(number_value(lhs)? + number_value(rhs)?))
}

pub fn sub(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(number_value(lhs)? - number_value(rhs)?))
}

pub fn mul(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(number_value(lhs)? * number_value(rhs)?))
}

pub fn div(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    let divisor = number_value(rhs)?;
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(create_number(number_value(lhs)? / divisor))
}

/// Both operands are truncated to integers before combining; there is no
/// general real-exponent form here.
pub fn pow(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    let base = number_value(lhs)?.trunc();
    let exponent = number_value(rhs)?
        .trunc()
        .clamp(i32::MIN as f64, i32::MAX as f64) as i32;
    Ok(create_number(base.powi(exponent)))
}

/// Truncating integer remainder.
pub fn rem(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    let divisor = number_value(rhs)?.trunc() as i64;
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let dividend = number_value(lhs)?.trunc() as i64;
    Ok(create_number((dividend % divisor) as f64))
}

pub fn gt(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(number_value(lhs)? > number_value(rhs)?))
}

pub fn ge(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(number_value(lhs)? >= number_value(rhs)?))
}

pub fn lt(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(number_value(lhs)? < number_value(rhs)?))
}

pub fn le(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(number_value(lhs)? <= number_value(rhs)?))
}

pub fn sqrt(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(libm::sqrt(number_value(obj)?)))
}

pub fn sin(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(libm::sin(number_value(obj)?)))
}

pub fn cos(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(libm::cos(number_value(obj)?)))
}

pub fn exp(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(libm::exp(number_value(obj)?)))
}

pub fn ln(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(libm::log(number_value(obj)?)))
}

/// Uniform draw from [0, 1).
pub fn rand() -> RtResult<ObjectRef> {
    let mut bytes = [0u8; 8];
    if getrandom::fill(&mut bytes).is_err() {
        return Ok(create_number(0.0));
    }
    let mantissa = u64::from_le_bytes(bytes) >> 11;
    Ok(create_number(mantissa as f64 / (1u64 << 53) as f64))
}

/// Decimal parse of a String object's content: longest numeric prefix,
/// 0.0 when no prefix parses at all.
pub fn parse(obj: ObjectRef) -> RtResult<ObjectRef> {
    let text = string_value(obj)?;
    Ok(create_number(scan_decimal(&text).unwrap_or(0.0)))
}
