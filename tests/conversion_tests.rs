use array_generics::*;

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[test]
fn test_to_integer() {
    assert_eq!(to_integer(f64::NAN), 0.0);
    assert_eq!(to_integer(2.7), 2.0);
    assert_eq!(to_integer(-2.7), -2.0);
    assert_eq!(to_integer(f64::INFINITY), f64::INFINITY);
    assert_eq!(to_integer(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert!(to_integer(-0.0).is_sign_negative());
}

#[test]
fn test_to_uint32() {
    assert_eq!(to_uint32(2.7), 2);
    assert_eq!(to_uint32(-1.0), 4294967295);
    assert_eq!(to_uint32(4294967298.0), 2);
    assert_eq!(to_uint32(f64::NAN), 0);
    assert_eq!(to_uint32(f64::INFINITY), 0);
}

#[test]
fn test_string_to_number() {
    assert_eq!(string_to_number(""), 0.0);
    assert_eq!(string_to_number("  42\n"), 42.0);
    assert_eq!(string_to_number("-1.5e3"), -1500.0);
    assert_eq!(string_to_number(".5"), 0.5);
    assert_eq!(string_to_number("0x1F"), 31.0);
    assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
    for bad in ["abc", "1px", "inf", "NaN", "--5", "0x", "1 2", "e5"] {
        assert!(string_to_number(bad).is_nan(), "{bad:?}");
    }
}

#[test]
fn test_to_number_of_values() {
    assert!(to_number(&Value::Undefined).is_nan());
    assert_eq!(to_number(&Value::Null), 0.0);
    assert_eq!(to_number(&Value::Boolean(true)), 1.0);
    assert_eq!(to_number(&Value::from(" 7 ")), 7.0);
    assert!(to_number(&Value::Object(new_js_object_data())).is_nan());

    let env = new_js_object_data();
    initialize_array_module(&env).unwrap();
    // [5] -> "5" -> 5, [] -> "" -> 0
    assert_eq!(to_number(&parse_json_value("[5]", &env).unwrap()), 5.0);
    assert_eq!(to_number(&parse_json_value("[]", &env).unwrap()), 0.0);
    assert!(to_number(&parse_json_value("[1, 2]", &env).unwrap()).is_nan());
    assert_eq!(to_number(&Value::Object(to_object(&Value::from("12")).unwrap())), 12.0);
}

#[test]
fn test_number_to_string() {
    assert_eq!(number_to_string(0.0), "0");
    assert_eq!(number_to_string(-0.0), "0");
    assert_eq!(number_to_string(-3.0), "-3");
    assert_eq!(number_to_string(0.25), "0.25");
    assert_eq!(number_to_string(1e21), "1e+21");
    assert_eq!(number_to_string(f64::NAN), "NaN");
    assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_value_to_string() {
    let env = new_js_object_data();
    initialize_array_module(&env).unwrap();
    assert_eq!(value_to_string(&parse_json_value(r#"[1, null, "a", [2, 3]]"#, &env).unwrap()), "1,,a,2,3");
    assert_eq!(value_to_string(&Value::Object(new_js_object_data())), "[object Object]");
    let f = make_native_function("f", |_this, _args| Ok(Value::Undefined));
    assert_eq!(value_to_string(&f), "function f() { [native code] }");

    let arr = array_from_values(&env, vec![Value::from(1)]);
    obj_set_key_value(&arr, &PropertyKey::Index(1), Value::Object(arr.clone()));
    obj_set_key_value(&arr, &"length".into(), Value::from(2));
    assert_eq!(value_to_string(&Value::Object(arr.clone())), "1,");
    // break the cycle so the array can be freed
    arr.borrow_mut().remove(&PropertyKey::Index(1));
}

#[test]
fn test_to_object() {
    assert!(matches!(to_object(&Value::Undefined), Err(JSError::TypeConversionError { value: "undefined" })));
    assert!(matches!(to_object(&Value::Null), Err(JSError::TypeConversionError { value: "null" })));

    let boxed = to_object(&Value::from("hi")).unwrap();
    assert_eq!(boxed.borrow().class, ObjectClass::String);
    assert_eq!(boxed.length(), 2);
    assert!(boxed.has_index(1));
    assert!(!boxed.has_index(2));
    assert!(boxed.get(0).strict_equals(&Value::from("h")));

    let obj = new_js_object_data();
    assert!(std::rc::Rc::ptr_eq(&to_object(&Value::Object(obj.clone())).unwrap(), &obj));
}

#[test]
fn test_property_keys_are_canonical() {
    assert_eq!(PropertyKey::from("7"), PropertyKey::Index(7));
    assert_eq!(PropertyKey::from("07"), PropertyKey::String("07".to_string()));
    assert_eq!(PropertyKey::from("-1"), PropertyKey::String("-1".to_string()));
    assert_eq!(PropertyKey::from("4294967295"), PropertyKey::String("4294967295".to_string()));
    assert_eq!(PropertyKey::from("4294967294").as_index(), Some(4294967294));
    assert_eq!(PropertyKey::Index(3).to_string(), "3");
}

#[test]
fn test_ranges() {
    let n = |v: f64| Value::Number(v);
    assert_eq!(resolve_range(None, None, 4), 0..4);
    assert_eq!(resolve_range(Some(&n(-1.0)), None, 4), 3..4);
    assert_eq!(resolve_range(Some(&n(3.0)), Some(&n(1.0)), 4), 3..3);
    assert_eq!(resolve_range(Some(&Value::Undefined), Some(&n(f64::INFINITY)), 4), 0..4);
    assert_eq!(resolve_last_start(None, 0), None);
    assert_eq!(resolve_last_start(None, 4), Some(3));
    assert_eq!(resolve_last_start(Some(&n(-4.0)), 4), Some(0));
    assert_eq!(resolve_last_start(Some(&n(-5.0)), 4), None);
    assert_eq!(resolve_last_start(Some(&n(10.0)), 4), Some(3));
}
