//! The surface generated code calls into: console output, the loop and
//! branch drivers of the lowering contract, and the named-symbol registry.

mod registry;

pub use registry::{INTRINSICS, IntrinsicFn, IntrinsicSpec, resolve_symbol};

use std::io::Write;

use crate::builtins::ranges::create_range;
use crate::call::dispatch::{invoke_unary, resolve_method};
use crate::constants::{METHOD_CURRENT, METHOD_NEXT, METHOD_TO_STRING};
use crate::error::{RtResult, RuntimeError};
use crate::object::ObjectRef;
use crate::object::accessors::{bool_value, string_value};

/// Resolves `toString` on the argument and writes the text plus a newline
/// to standard output. Returns the String object so callers can reuse the
/// rendered text; the write itself is best effort.
pub fn print(obj: ObjectRef) -> RtResult<ObjectRef> {
    let rendered = invoke_unary(obj, METHOD_TO_STRING)?;
    let text = string_value(rendered)?;
    let mut out = std::io::stdout().lock();
    let _ = out.write_all(text.as_bytes());
    let _ = out.write_all(b"\n");
    Ok(rendered)
}

/// The range constructor as generated code calls it.
pub fn range(start: ObjectRef, end: ObjectRef) -> RtResult<ObjectRef> {
    create_range(start, end)
}

/// The loop shape of the lowering contract: resolve `next` and `current`
/// once, then call `next` until it answers false, feeding each `current`
/// value to the body. Returns the last body result, `None` when the
/// iterable was already exhausted or empty. Iterative per nesting level;
/// nesting depth is the only recursion generated code brings.
pub fn drive_loop<F>(iterable: ObjectRef, mut body: F) -> RtResult<Option<ObjectRef>>
where
    F: FnMut(ObjectRef) -> RtResult<ObjectRef>,
{
    let next = resolve_method(iterable, METHOD_NEXT, None)?
        .ok_or_else(|| RuntimeError::attribute_not_found(METHOD_NEXT))?;
    let current = resolve_method(iterable, METHOD_CURRENT, None)?
        .ok_or_else(|| RuntimeError::attribute_not_found(METHOD_CURRENT))?;
    let mut last = None;
    while bool_value(next.call1(iterable)?)? {
        let item = current.call1(iterable)?;
        last = Some(body(item)?);
    }
    Ok(last)
}

/// The conditional shape of the lowering contract: the condition is an
/// already-evaluated Boolean, and exactly one branch runs.
pub fn select<T, E>(condition: ObjectRef, then_branch: T, else_branch: E) -> RtResult<ObjectRef>
where
    T: FnOnce() -> RtResult<ObjectRef>,
    E: FnOnce() -> RtResult<ObjectRef>,
{
    if bool_value(condition)? {
        then_branch()
    } else {
        else_branch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::booleans::create_boolean;
    use crate::builtins::numbers::create_number;
    use crate::builtins::vectors::create_vector;
    use crate::object::accessors::number_value;
    use crate::object::builders::new_object;

    #[test]
    fn test_drive_loop_vector() {
        let vector =
            create_vector(vec![create_number(1.0), create_number(2.0), create_number(4.0)]);
        let mut total = 0.0;
        let last = drive_loop(vector, |item| {
            total += number_value(item).unwrap();
            Ok(item)
        })
        .unwrap();
        assert_eq!(total, 7.0);
        assert_eq!(number_value(last.unwrap()).unwrap(), 4.0);
    }

    #[test]
    fn test_drive_loop_empty_returns_none() {
        let vector = create_vector(Vec::new());
        let last = drive_loop(vector, |item| Ok(item)).unwrap();
        assert!(last.is_none());
    }

    #[test]
    fn test_drive_loop_requires_iteration_methods() {
        let plain = new_object();
        assert_eq!(
            drive_loop(plain, Ok).unwrap_err(),
            RuntimeError::attribute_not_found(METHOD_NEXT)
        );
    }

    #[test]
    fn test_select_runs_one_branch() {
        let taken = select(
            create_boolean(true),
            || Ok(create_number(1.0)),
            || Ok(create_number(2.0)),
        )
        .unwrap();
        assert_eq!(number_value(taken).unwrap(), 1.0);
        let other = select(
            create_boolean(false),
            || Ok(create_number(1.0)),
            || Ok(create_number(2.0)),
        )
        .unwrap();
        assert_eq!(number_value(other).unwrap(), 2.0);
    }

    #[test]
    fn test_print_returns_rendered_string() {
        let rendered = print(create_number(3.5)).unwrap();
        assert_eq!(string_value(rendered).unwrap(), "3.500000");
    }
}
