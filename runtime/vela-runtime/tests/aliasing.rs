//! Shared-store visibility: mutation through one alias must be observable
//! through every other holder, because reseat-based bindings are the only
//! assignment mechanism lowered code has.

use vela_runtime::{
    AttrValue, create_boolean, create_number, create_vector, duplicate_binding, get_element,
    invoke_unary, new_empty_object, number_value, replace_attribute, reseat, same_store,
    string_value, RuntimeError,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn mutation_is_visible_through_every_alias() {
    init_logs();
    let value = create_number(1.0);
    let binding = duplicate_binding(value).unwrap();
    let another = duplicate_binding(binding).unwrap();
    assert!(same_store(value, another).unwrap());

    replace_attribute(binding, "value", AttrValue::Number(2.0)).unwrap();
    assert_eq!(number_value(value).unwrap(), 2.0);
    assert_eq!(number_value(another).unwrap(), 2.0);
}

#[test]
fn reseat_redirects_only_the_target() {
    init_logs();
    let a = create_number(1.0);
    let b = create_number(9.0);
    let binding = duplicate_binding(a).unwrap();

    reseat(binding, b).unwrap();
    assert_eq!(number_value(binding).unwrap(), 9.0);
    // The value the binding was initialized from is untouched.
    assert_eq!(number_value(a).unwrap(), 1.0);
    assert!(!same_store(binding, a).unwrap());
    assert!(same_store(binding, b).unwrap());
}

#[test]
fn reseat_retargets_what_an_element_cell_means() {
    init_logs();
    let vector = create_vector(vec![create_number(10.0), create_number(20.0)]);
    let first = get_element(vector, create_number(0.0)).unwrap();
    reseat(first, create_number(99.0)).unwrap();
    let rendered = invoke_unary(vector, "toString").unwrap();
    assert_eq!(
        string_value(rendered).unwrap(),
        "[99.000000, 20.000000]"
    );
}

#[test]
fn empty_shell_must_be_reseated_before_use() {
    init_logs();
    let shell = new_empty_object();
    assert_eq!(
        number_value(shell).unwrap_err(),
        RuntimeError::MissingStore
    );
    reseat(shell, create_number(5.0)).unwrap();
    assert_eq!(number_value(shell).unwrap(), 5.0);
}

#[test]
fn reseat_can_change_an_objects_type() {
    init_logs();
    let binding = duplicate_binding(create_number(1.0)).unwrap();
    assert_eq!(vela_runtime::type_of(binding).unwrap().as_deref(), Some("Number"));
    reseat(binding, create_boolean(true)).unwrap();
    assert_eq!(
        vela_runtime::type_of(binding).unwrap().as_deref(),
        Some("Boolean")
    );
    let rendered = invoke_unary(binding, "toString").unwrap();
    assert_eq!(string_value(rendered).unwrap(), "true");
}
