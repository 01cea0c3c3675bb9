//! The generated-code shape end to end: a selection-style sort lowered the
//! way the compiler emits it — one function per nesting level, every live
//! binding passed explicitly, mutable bindings made with
//! `duplicate_binding` and updated only through `reseat`.

use vela_runtime::builtins::numbers::lt;
use vela_runtime::{
    ObjectRef, RtResult, create_number, create_vector, drive_loop, duplicate_binding, get_element,
    invoke_binary, invoke_unary, print, range, reseat, select, string_value,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sort(p0: ObjectRef) -> RtResult<ObjectRef> {
    let_in_block(p0)
}

fn let_in_block(p0: ObjectRef) -> RtResult<ObjectRef> {
    let v0 = duplicate_binding(create_number(0.0))?;
    outer_loop(v0, p0)
}

fn outer_loop(v0: ObjectRef, p0: ObjectRef) -> RtResult<ObjectRef> {
    let iterable = range(create_number(0.0), invoke_unary(p0, "size")?)?;
    let last = drive_loop(iterable, |v1| inner_loop(v1, v0, p0))?;
    Ok(last.unwrap_or(p0))
}

fn inner_loop(v1: ObjectRef, v0: ObjectRef, p0: ObjectRef) -> RtResult<ObjectRef> {
    let iterable = range(duplicate_binding(v1)?, invoke_unary(p0, "size")?)?;
    let last = drive_loop(iterable, |v2| swap_block(v2, v1, v0, p0))?;
    Ok(last.unwrap_or(p0))
}

fn swap_block(
    v2: ObjectRef,
    v1: ObjectRef,
    v0: ObjectRef,
    p0: ObjectRef,
) -> RtResult<ObjectRef> {
    let condition = lt(get_element(p0, v2)?, get_element(p0, v1)?)?;
    select(
        condition,
        || {
            // Three-reseat swap through the temporary binding v0.
            reseat(v0, get_element(p0, v1)?)?;
            reseat(get_element(p0, v1)?, get_element(p0, v2)?)?;
            reseat(get_element(p0, v2)?, v0)?;
            Ok(p0)
        },
        || Ok(p0),
    )
}

#[test]
fn sorts_and_renders_exactly() {
    init_logs();
    let input = create_vector(
        [78.0, 12.0, 100.0, 0.0, 6.0, 9.0, 4.5]
            .iter()
            .map(|&v| create_number(v))
            .collect(),
    );
    let sorted = sort(duplicate_binding(input).unwrap()).unwrap();
    let rendered = print(duplicate_binding(sorted).unwrap()).unwrap();
    assert_eq!(
        string_value(rendered).unwrap(),
        "[0.000000, 4.500000, 6.000000, 9.000000, 12.000000, 78.000000, 100.000000]"
    );

    let expected = create_vector(
        [0.0, 4.5, 6.0, 9.0, 12.0, 78.0, 100.0]
            .iter()
            .map(|&v| create_number(v))
            .collect(),
    );
    let equal = invoke_binary(sorted, "equals", expected).unwrap();
    assert_eq!(string_value(invoke_unary(equal, "toString").unwrap()).unwrap(), "true");
}

#[test]
fn sort_is_visible_through_the_original_binding() {
    init_logs();
    // The sort swaps element cells in place, so the caller's own reference
    // observes the new order without any return-value plumbing.
    let input = create_vector(
        [3.0, 1.0, 2.0].iter().map(|&v| create_number(v)).collect(),
    );
    sort(input).unwrap();
    let rendered = invoke_unary(input, "toString").unwrap();
    assert_eq!(
        string_value(rendered).unwrap(),
        "[1.000000, 2.000000, 3.000000]"
    );
}

#[test]
fn already_sorted_input_is_stable() {
    init_logs();
    let input = create_vector(
        [1.0, 2.0, 3.0].iter().map(|&v| create_number(v)).collect(),
    );
    let sorted = sort(input).unwrap();
    assert_eq!(
        string_value(invoke_unary(sorted, "toString").unwrap()).unwrap(),
        "[1.000000, 2.000000, 3.000000]"
    );
}
