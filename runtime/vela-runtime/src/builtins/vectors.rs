use crate::builtins::booleans::create_boolean;
use crate::builtins::numbers::{create_number, same_type};
use crate::builtins::strings::create_string;
use crate::call::dispatch::{invoke_binary, invoke_unary};
use crate::constants::{
    ATTR_CURRENT, ATTR_LIST, ATTR_SIZE, ATTR_VALUE, METHOD_CURRENT, METHOD_EQUALS, METHOD_NEXT,
    METHOD_SIZE, METHOD_TO_STRING, PROTO_ITERABLE, TYPE_VECTOR,
};
use crate::error::{RtResult, RuntimeError};
use crate::heap;
use crate::object::accessors::{
    bool_value, int_attr, list_snapshot, number_value, object_attr, string_value,
};
use crate::object::builders::base_record;
use crate::object::{AttrValue, MethodSlot, ObjectRef, replace_attribute};

/// A fixed-length vector of object cells, tagged Iterable. The iteration
/// cursor is a full Number object mutated in place, so iteration is
/// stateful and single-pass: an exhausted vector must be re-wrapped to
/// iterate again.
pub fn create_vector(elements: Vec<ObjectRef>) -> ObjectRef {
    let mut record = base_record();
    record.ancestry.insert(0, TYPE_VECTOR.into());
    record.protocols.push(PROTO_ITERABLE.into());
    record
        .attrs
        .insert(ATTR_SIZE, AttrValue::Int(elements.len() as i64));
    record
        .attrs
        .insert(ATTR_LIST, AttrValue::List(elements.into_boxed_slice()));
    record
        .attrs
        .insert(ATTR_CURRENT, AttrValue::Object(create_number(-1.0)));
    record.methods.push(MethodSlot::unary(
        TYPE_VECTOR,
        METHOD_TO_STRING,
        vector_to_string,
    ));
    record.methods.push(MethodSlot::binary(
        TYPE_VECTOR,
        METHOD_EQUALS,
        vector_equals,
    ));
    record
        .methods
        .push(MethodSlot::unary(TYPE_VECTOR, METHOD_SIZE, vector_size));
    record
        .methods
        .push(MethodSlot::unary(TYPE_VECTOR, METHOD_NEXT, vector_next));
    record.methods.push(MethodSlot::unary(
        TYPE_VECTOR,
        METHOD_CURRENT,
        vector_current,
    ));
    heap::alloc_seeded(record)
}

pub(crate) fn vector_size(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_number(int_attr(obj, ATTR_SIZE)? as f64))
}

/// Advances the cursor; false once it would reach the length, and false
/// forever after without a fresh wrap.
pub(crate) fn vector_next(obj: ObjectRef) -> RtResult<ObjectRef> {
    let size = int_attr(obj, ATTR_SIZE)?;
    let cursor = object_attr(obj, ATTR_CURRENT)?;
    let current = number_value(cursor)?;
    if current + 1.0 < size as f64 {
        replace_attribute(cursor, ATTR_VALUE, AttrValue::Number(current + 1.0))?;
        return Ok(create_boolean(true));
    }
    Ok(create_boolean(false))
}

pub(crate) fn vector_current(obj: ObjectRef) -> RtResult<ObjectRef> {
    let cursor = object_attr(obj, ATTR_CURRENT)?;
    get_element(obj, cursor)
}

/// Element at a Number index, truncated toward zero; anything outside
/// `[0, len)` is an `IndexOutOfRange` error.
pub fn get_element(vector: ObjectRef, index: ObjectRef) -> RtResult<ObjectRef> {
    let elements = list_snapshot(vector, ATTR_LIST)?;
    let at = number_value(index)? as i64;
    if at < 0 || at as usize >= elements.len() {
        return Err(RuntimeError::index_out_of_range(at, elements.len()));
    }
    Ok(elements[at as usize])
}

/// `[e0, e1, …]` with every element rendered through its own dispatched
/// `toString`.
pub(crate) fn vector_to_string(obj: ObjectRef) -> RtResult<ObjectRef> {
    let elements = list_snapshot(obj, ATTR_LIST)?;
    let mut rendered = Vec::with_capacity(elements.len());
    for element in elements {
        rendered.push(string_value(invoke_unary(element, METHOD_TO_STRING)?)?);
    }
    Ok(create_string(&format!("[{}]", rendered.join(", "))))
}

/// Equal length and pairwise dispatched `equals`.
pub(crate) fn vector_equals(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    if !same_type(lhs, rhs)? {
        return Ok(create_boolean(false));
    }
    let left = list_snapshot(lhs, ATTR_LIST)?;
    let right = list_snapshot(rhs, ATTR_LIST)?;
    if left.len() != right.len() {
        return Ok(create_boolean(false));
    }
    for (a, b) in left.iter().zip(right.iter()) {
        if !bool_value(invoke_binary(*a, METHOD_EQUALS, *b)?)? {
            return Ok(create_boolean(false));
        }
    }
    Ok(create_boolean(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::dispatch::is_protocol;

    fn number_vector(values: &[f64]) -> ObjectRef {
        create_vector(values.iter().map(|&v| create_number(v)).collect())
    }

    #[test]
    fn test_iteration_yields_elements_in_order() {
        let vector = number_vector(&[1.0, 2.0, 3.0]);
        let mut seen = Vec::new();
        while bool_value(vector_next(vector).unwrap()).unwrap() {
            seen.push(number_value(vector_current(vector).unwrap()).unwrap());
        }
        assert_eq!(seen, vec![1.0, 2.0, 3.0]);
        // Exhausted for good.
        for _ in 0..3 {
            assert!(!bool_value(vector_next(vector).unwrap()).unwrap());
        }
    }

    #[test]
    fn test_current_before_first_next_is_out_of_range() {
        let vector = number_vector(&[1.0]);
        assert_eq!(
            vector_current(vector).unwrap_err(),
            RuntimeError::index_out_of_range(-1, 1)
        );
    }

    #[test]
    fn test_get_element_bounds() {
        let vector = number_vector(&[5.0, 6.0]);
        let element = get_element(vector, create_number(1.0)).unwrap();
        assert_eq!(number_value(element).unwrap(), 6.0);
        assert_eq!(
            get_element(vector, create_number(2.0)).unwrap_err(),
            RuntimeError::index_out_of_range(2, 2)
        );
        assert_eq!(
            get_element(vector, create_number(-1.0)).unwrap_err(),
            RuntimeError::index_out_of_range(-1, 2)
        );
    }

    #[test]
    fn test_to_string_renders_elements() {
        let vector = number_vector(&[0.0, 4.5]);
        let rendered = vector_to_string(vector).unwrap();
        assert_eq!(string_value(rendered).unwrap(), "[0.000000, 4.500000]");
        assert_eq!(
            string_value(vector_to_string(number_vector(&[])).unwrap()).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_equals_pairwise() {
        let a = number_vector(&[1.0, 2.0]);
        let b = number_vector(&[1.0, 2.0]);
        let c = number_vector(&[1.0, 3.0]);
        let short = number_vector(&[1.0]);
        assert!(bool_value(vector_equals(a, b).unwrap()).unwrap());
        assert!(!bool_value(vector_equals(a, c).unwrap()).unwrap());
        assert!(!bool_value(vector_equals(a, short).unwrap()).unwrap());
    }

    #[test]
    fn test_tagged_iterable() {
        let vector = number_vector(&[]);
        assert!(is_protocol(vector, PROTO_ITERABLE).unwrap());
    }
}
