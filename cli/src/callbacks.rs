//! Built-in callbacks reachable from the command line as `@Name`.

use array_generics::{JSError, Value, get_argument, is_array, make_native_function, to_number, value_to_string};

pub const CALLBACK_NAMES: [&str; 6] = ["Boolean", "Number", "String", "isArray", "sum", "not"];

/// Resolve `@Name` to a native function.
pub fn builtin_callback(name: &str) -> Option<Value> {
    let func = match name {
        "Boolean" => make_native_function(name, |_this, args| Ok(Value::Boolean(get_argument(args, 0).to_boolean()))),
        "Number" => make_native_function(name, |_this, args| Ok(Value::Number(to_number(&get_argument(args, 0))))),
        "String" => make_native_function(name, |_this, args| Ok(Value::from(value_to_string(&get_argument(args, 0))))),
        "isArray" => make_native_function(name, |_this, args| Ok(Value::Boolean(is_array(&get_argument(args, 0))))),
        // (accumulator, element) -> accumulator + element, numerically
        "sum" => make_native_function(name, |_this, args| {
            Ok(Value::Number(to_number(&get_argument(args, 0)) + to_number(&get_argument(args, 1))))
        }),
        "not" => make_native_function(name, |_this, args| Ok(Value::Boolean(!get_argument(args, 0).to_boolean()))),
        _ => return None,
    };
    Some(func)
}

pub fn unknown_callback(name: &str) -> JSError {
    JSError::TypeError {
        message: format!("unknown callback @{name} (expected one of: {})", CALLBACK_NAMES.join(", ")),
    }
}
