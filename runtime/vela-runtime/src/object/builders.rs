use crate::builtins::booleans::create_boolean;
use crate::builtins::strings::create_string;
use crate::constants::{METHOD_EQUALS, METHOD_TO_STRING, TYPE_OBJECT};
use crate::error::RtResult;
use crate::heap;

use super::{MethodSlot, ObjectRef, StoreRecord};

/// A store pre-loaded with the universal `Object` behavior every type
/// shares: ancestry root tag, identity `equals`, handle-address `toString`.
pub(crate) fn base_record() -> StoreRecord {
    let mut record = StoreRecord::new();
    record.ancestry.push(TYPE_OBJECT.into());
    record.methods.push(MethodSlot::unary(
        TYPE_OBJECT,
        METHOD_TO_STRING,
        object_to_string,
    ));
    record.methods.push(MethodSlot::binary(
        TYPE_OBJECT,
        METHOD_EQUALS,
        object_equals,
    ));
    record
}

/// A plain object: fresh store, universal methods, nothing else.
pub fn new_object() -> ObjectRef {
    heap::alloc_seeded(base_record())
}

pub(crate) fn object_to_string(obj: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_string(&format!("{:#x}", obj.bits())))
}

pub(crate) fn object_equals(lhs: ObjectRef, rhs: ObjectRef) -> RtResult<ObjectRef> {
    Ok(create_boolean(lhs == rhs))
}
