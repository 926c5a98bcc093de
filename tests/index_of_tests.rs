use array_generics::*;

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

const DUPLICATES: &str = r#"{"0": "a", "1": "b", "2": "a", "3": "b", "length": 4}"#;

fn setup() -> JSObjectPtr {
    let env = new_js_object_data();
    initialize_array_module(&env).unwrap();
    env
}

fn search(env: &JSObjectPtr, method: &str, receiver: &str, args: &[Value]) -> f64 {
    let mut call_args = vec![parse_json_value(receiver, env).unwrap()];
    call_args.extend_from_slice(args);
    match call_array_static(env, method, &call_args).unwrap() {
        Value::Number(n) => n,
        other => panic!("{method} returned {other:?}"),
    }
}

#[test]
fn test_index_of_basic() {
    let env = setup();
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a")]), 0.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("b")]), 1.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("c")]), -1.0);
    assert_eq!(search(&env, "indexOf", "[]", &[Value::from("a")]), -1.0);
}

#[test]
fn test_index_of_start() {
    let env = setup();
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a"), Value::from(1)]), 2.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a"), Value::from(-2)]), 2.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a"), Value::from(-100)]), 0.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a"), Value::from(4)]), -1.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a"), Value::Number(f64::INFINITY)]), -1.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("b"), Value::Number(f64::NEG_INFINITY)]), 1.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a"), Value::from("1")]), 2.0);
    assert_eq!(search(&env, "indexOf", DUPLICATES, &[Value::from("a"), Value::Number(f64::NAN)]), 0.0);
}

#[test]
fn test_last_index_of_basic() {
    let env = setup();
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("a")]), 2.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("b")]), 3.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("c")]), -1.0);
    assert_eq!(search(&env, "lastIndexOf", "[]", &[Value::Undefined]), -1.0);
}

#[test]
fn test_last_index_of_start() {
    let env = setup();
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("a"), Value::from(1)]), 0.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("b"), Value::from(-2)]), 1.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("b"), Value::from(100)]), 3.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("a"), Value::from(0)]), 0.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("b"), Value::from(0)]), -1.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("b"), Value::Number(f64::INFINITY)]), 3.0);
}

#[test]
fn test_last_index_of_start_before_first_element() {
    let env = setup();
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("a"), Value::from(-4)]), 0.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("a"), Value::from(-5)]), -1.0);
    assert_eq!(search(&env, "lastIndexOf", DUPLICATES, &[Value::from("a"), Value::Number(f64::NEG_INFINITY)]), -1.0);
}

#[test]
fn test_search_uses_strict_equality() {
    let env = setup();
    let mixed = r#"[1, "1", true, null, 0]"#;
    assert_eq!(search(&env, "indexOf", mixed, &[Value::from("1")]), 1.0);
    assert_eq!(search(&env, "indexOf", mixed, &[Value::Number(1.0)]), 0.0);
    assert_eq!(search(&env, "indexOf", mixed, &[Value::Boolean(true)]), 2.0);
    assert_eq!(search(&env, "indexOf", mixed, &[Value::Null]), 3.0);
    assert_eq!(search(&env, "indexOf", mixed, &[Value::Undefined]), -1.0);
    // +0 === -0
    assert_eq!(search(&env, "indexOf", mixed, &[Value::Number(-0.0)]), 4.0);
    assert_eq!(search(&env, "lastIndexOf", mixed, &[Value::Boolean(false)]), -1.0);
}

#[test]
fn test_nan_is_never_found() {
    let env = setup();
    let receiver = Value::Object(array_from_values(&env, vec![Value::Number(f64::NAN), Value::Number(f64::NAN)]));
    let found = call_array_static(&env, "indexOf", &[receiver.clone(), Value::Number(f64::NAN)]).unwrap();
    assert_eq!(format_value(&found), "-1");
    let found = call_array_static(&env, "lastIndexOf", &[receiver, Value::Number(f64::NAN)]).unwrap();
    assert_eq!(format_value(&found), "-1");
}

#[test]
fn test_objects_compare_by_identity() {
    let env = setup();
    let target = Value::Object(new_js_object_data());
    let lookalike = Value::Object(new_js_object_data());
    let receiver = Value::Object(array_from_values(&env, vec![lookalike, target.clone()]));
    let found = call_array_static(&env, "indexOf", &[receiver, target]).unwrap();
    assert_eq!(format_value(&found), "1");
}

#[test]
fn test_holes_are_not_undefined() {
    let env = setup();
    let holes = Value::Object(array_from_slots(&env, vec![None, Some(Value::from(1)), None]));
    let found = call_array_static(&env, "indexOf", &[holes.clone(), Value::Undefined]).unwrap();
    assert_eq!(format_value(&found), "-1");
    let found = call_array_static(&env, "lastIndexOf", &[holes, Value::Undefined]).unwrap();
    assert_eq!(format_value(&found), "-1");

    let stored = Value::Object(array_from_slots(&env, vec![None, Some(Value::Undefined)]));
    let found = call_array_static(&env, "indexOf", &[stored, Value::Undefined]).unwrap();
    assert_eq!(format_value(&found), "1");
}

#[test]
fn test_search_string_receiver() {
    let env = setup();
    let found = call_array_static(&env, "indexOf", &[Value::from("hello"), Value::from("l")]).unwrap();
    assert_eq!(format_value(&found), "2");
    let found = call_array_static(&env, "lastIndexOf", &[Value::from("hello"), Value::from("l")]).unwrap();
    assert_eq!(format_value(&found), "3");
}

#[test]
fn test_search_prototype_form() {
    let env = setup();
    let receiver = parse_json_value(DUPLICATES, &env).unwrap();
    let found = call_array_method(&env, &receiver, "lastIndexOf", &[Value::from("a")]).unwrap();
    assert_eq!(format_value(&found), "2");

    let err = call_array_method(&env, &Value::Null, "indexOf", &[Value::from("a")]).unwrap_err();
    assert!(matches!(err, JSError::TypeConversionError { value: "null" }));
}

#[test]
fn test_generic_search_on_slots() {
    let slots = vec![Some(Value::from("x")), None, Some(Value::from("x"))];
    assert_eq!(array_generics::js_array_generics::index_of(&slots, &Value::from("x"), None), 0);
    assert_eq!(array_generics::js_array_generics::index_of(&slots, &Value::from("x"), Some(&Value::from(1))), 2);
    assert_eq!(array_generics::js_array_generics::last_index_of(&slots, &Value::from("x"), Some(&Value::from(1))), 0);
    assert_eq!(array_generics::js_array_generics::last_index_of(&slots, &Value::Undefined, None), -1);
}

#[test]
fn test_search_scenarios() {
    let env = setup();
    let a = r#"{"0": "a", "1": "b", "2": "a", "length": 3}"#;
    let target = || Value::from("a");
    let n = Value::Number;
    assert_eq!(search(&env, "indexOf", a, &[target()]), 0.0);
    assert_eq!(search(&env, "indexOf", a, &[target(), n(2.0)]), 2.0);
    assert_eq!(search(&env, "indexOf", a, &[target(), n(-2.0)]), 2.0);
    assert_eq!(search(&env, "indexOf", a, &[target(), n(f64::INFINITY)]), -1.0);
    assert_eq!(search(&env, "indexOf", a, &[target(), n(f64::NEG_INFINITY)]), 0.0);
    assert_eq!(search(&env, "indexOf", a, &[target(), n(f64::NAN)]), 0.0);
    assert_eq!(search(&env, "lastIndexOf", a, &[target()]), 2.0);
    assert_eq!(search(&env, "lastIndexOf", a, &[target(), n(2.0)]), 2.0);
    assert_eq!(search(&env, "lastIndexOf", a, &[target(), n(-2.0)]), 0.0);
    assert_eq!(search(&env, "lastIndexOf", a, &[target(), n(f64::INFINITY)]), 2.0);
    assert_eq!(search(&env, "lastIndexOf", a, &[target(), n(f64::NEG_INFINITY)]), -1.0);
    assert_eq!(search(&env, "lastIndexOf", a, &[target(), n(f64::NAN)]), 0.0);
}

#[test]
fn test_single_occurrence_found_from_both_ends() {
    let env = setup();
    for target in ["a", "b", "c", "d"] {
        let receiver = r#"["d", "c", "b", "a"]"#;
        let first = search(&env, "indexOf", receiver, &[Value::from(target)]);
        let last = search(&env, "lastIndexOf", receiver, &[Value::from(target)]);
        assert_eq!(first, last, "{target}");
    }
}
