use crate::core::{JSObjectPtr, Value, new_js_object_data, obj_set_key_value};
use crate::error::JSError;
use crate::js_array::array_from_values;
use crate::unicode::utf8_to_utf16;

/// Parse JSON text into a value. Arrays become arrays of `env`, objects become
/// plain objects with their keys in document order, so a sparse array-like is
/// written `{"0": "a", "2": "c", "length": 3}`.
pub fn parse_json_value(text: &str, env: &JSObjectPtr) -> Result<Value, JSError> {
    let json_value = serde_json::from_str::<serde_json::Value>(text)?;
    Ok(json_value_to_js_value(json_value, env))
}

pub fn json_value_to_js_value(json_value: serde_json::Value, env: &JSObjectPtr) -> Value {
    match json_value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => n.as_f64().map_or(Value::Number(f64::NAN), Value::Number),
        serde_json::Value::String(s) => Value::String(utf8_to_utf16(&s)),
        serde_json::Value::Array(arr) => {
            let values = arr.into_iter().map(|item| json_value_to_js_value(item, env)).collect();
            Value::Object(array_from_values(env, values))
        }
        serde_json::Value::Object(obj) => {
            let js_obj = new_js_object_data();
            for (key, value) in obj.into_iter() {
                let js_val = json_value_to_js_value(value, env);
                obj_set_key_value(&js_obj, &key.into(), js_val);
            }
            Value::Object(js_obj)
        }
    }
}
