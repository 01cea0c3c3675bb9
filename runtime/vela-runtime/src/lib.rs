//! Vela Runtime Core
//! The target ABI of the Vela compiler: a prototype-based object model with
//! string-keyed attribute tables, ancestry-walk method dispatch, protocol
//! tags, the builtin types built atop the same model, and the
//! reseat/iterate conventions lowered code follows.

pub mod builtins;
pub mod call;
pub mod constants;
pub mod error;
pub mod heap;
pub mod intrinsics;
pub mod object;
pub mod state;
pub mod utils;

pub use builtins::booleans::create_boolean;
pub use builtins::numbers::create_number;
pub use builtins::ranges::create_range;
pub use builtins::strings::create_string;
pub use builtins::vectors::{create_vector, get_element};
pub use call::dispatch::{
    invoke_binary, invoke_unary, is_protocol, is_type, resolve_method, type_of,
};
pub use error::{RtResult, RuntimeError};
pub use heap::{duplicate_binding, new_empty_object, release_object, reseat, same_store};
pub use intrinsics::{drive_loop, print, range, resolve_symbol, select};
pub use object::accessors::{bool_value, number_value, string_value};
pub use object::builders::new_object;
pub use object::{
    AttrValue, MethodFn, ObjectRef, add_protocol, insert_attribute, install_method,
    lookup_attribute, push_ancestor, remove_attribute, replace_attribute,
};
pub use state::profile_counters;
