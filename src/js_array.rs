use crate::core::{
    ArrayLike, JSObjectPtr, ObjectClass, PropertyKey, SparseArray, Value, join_elements, new_object_with_class,
    obj_get_key_value, obj_set_key_value, to_object, to_uint32, value_to_string,
};
use crate::error::JSError;
use crate::js_array_generics as generics;
use crate::js_function::{call_function, get_argument};
use crate::{function_name, raise_callback_error, raise_range_error, raise_type_error};

/// Methods the shim provides on `Array.prototype` and, in static form, on
/// `Array` itself.
pub const ES5_METHODS: [&str; 9] = ["indexOf", "lastIndexOf", "forEach", "every", "some", "filter", "map", "reduce", "reduceRight"];

/// ES3 methods that only get a static form.
pub const ES3_STATIC_METHODS: [&str; 10] = ["concat", "join", "slice", "pop", "push", "reverse", "shift", "sort", "splice", "unshift"];

/// ES3 prototype methods the host object model implements natively.
pub const HOST_METHODS: [&str; 4] = ["slice", "join", "push", "pop"];

/// Handle the Array constructor: `Array(length)` or `Array(...elements)`
pub fn handle_array_constructor(args: &[Value], env: &JSObjectPtr) -> Result<Value, JSError> {
    if let [Value::Number(n)] = args {
        if to_uint32(*n) as f64 != *n {
            return Err(raise_range_error!("Invalid array length"));
        }
        let array_obj = create_array(env);
        set_array_length(&array_obj, *n as u32);
        return Ok(Value::Object(array_obj));
    }
    Ok(Value::Object(array_from_values(env, args.to_vec())))
}

/// Handle `Array.prototype` method calls with `this` as the receiver
pub fn handle_array_instance_method(this: &Value, method: &str, args: &[Value], env: &JSObjectPtr) -> Result<Value, JSError> {
    log::trace!("{}: Array.prototype.{method} with {} args", function_name!(), args.len());
    let elements = to_object(this)?;
    let receiver = Value::Object(elements.clone());

    match method {
        "indexOf" => {
            let found = generics::index_of(&elements, &get_argument(args, 0), args.get(1));
            Ok(Value::Number(found as f64))
        }
        "lastIndexOf" => {
            let found = generics::last_index_of(&elements, &get_argument(args, 0), args.get(1));
            Ok(Value::Number(found as f64))
        }
        "forEach" => {
            let callback = require_callback(method, args)?;
            let scope = get_argument(args, 1);
            generics::for_each(&elements, |element, index| {
                call_function(&callback, &scope, &[element, Value::from(index), receiver.clone()])?;
                Ok(())
            })?;
            Ok(Value::Undefined)
        }
        "every" => {
            let callback = require_callback(method, args)?;
            let scope = get_argument(args, 1);
            let passed = generics::every(&elements, |element, index| {
                Ok(call_function(&callback, &scope, &[element, Value::from(index), receiver.clone()])?.to_boolean())
            })?;
            Ok(Value::Boolean(passed))
        }
        "some" => {
            let callback = require_callback(method, args)?;
            let scope = get_argument(args, 1);
            let passed = generics::some(&elements, |element, index| {
                Ok(call_function(&callback, &scope, &[element, Value::from(index), receiver.clone()])?.to_boolean())
            })?;
            Ok(Value::Boolean(passed))
        }
        "filter" => {
            let callback = require_callback(method, args)?;
            let scope = get_argument(args, 1);
            let kept = generics::filter(&elements, |element, index| {
                Ok(call_function(&callback, &scope, &[element, Value::from(index), receiver.clone()])?.to_boolean())
            })?;
            Ok(Value::Object(array_from_values(env, kept)))
        }
        "map" => {
            let callback = require_callback(method, args)?;
            let scope = get_argument(args, 1);
            let mapped = generics::map(&elements, |element, index| {
                call_function(&callback, &scope, &[element, Value::from(index), receiver.clone()])
            })?;
            Ok(Value::Object(array_from_sparse(env, &mapped)))
        }
        "reduce" | "reduceRight" => {
            let callback = require_callback(method, args)?;
            // An explicitly passed `undefined` still counts as an initial value.
            let initial = args.get(1).cloned();
            let step = |acc: Value, element: Value, index: u32| {
                call_function(&callback, &Value::Undefined, &[acc, element, Value::from(index), receiver.clone()])
            };
            if method == "reduce" {
                generics::reduce(&elements, initial, step)
            } else {
                generics::reduce_right(&elements, initial, step)
            }
        }
        "slice" => {
            let copied = generics::slice(&elements, args.first(), args.get(1));
            Ok(Value::Object(array_from_sparse(env, &copied)))
        }
        "join" => {
            let separator = match args.first() {
                None | Some(Value::Undefined) => ",".to_string(),
                Some(sep) => value_to_string(sep),
            };
            Ok(Value::from(join_elements(&elements, &separator)))
        }
        "push" => {
            let mut length = elements.length() as f64;
            for arg in args {
                obj_set_key_value(&elements, &PropertyKey::from(value_to_string(&Value::Number(length))), arg.clone());
                length += 1.0;
            }
            obj_set_key_value(&elements, &"length".into(), Value::Number(length));
            Ok(Value::Number(length))
        }
        "pop" => {
            let length = elements.length();
            if length == 0 {
                obj_set_key_value(&elements, &"length".into(), Value::Number(0.0));
                return Ok(Value::Undefined);
            }
            let key = PropertyKey::from(length - 1);
            let last = obj_get_key_value(&elements, &key).unwrap_or_default();
            elements.borrow_mut().remove(&key);
            obj_set_key_value(&elements, &"length".into(), Value::from(length - 1));
            Ok(last)
        }
        _ => Err(raise_type_error!(format!("Array.prototype.{method} is not a function"))),
    }
}

fn require_callback(method: &str, args: &[Value]) -> Result<Value, JSError> {
    let callback = get_argument(args, 0);
    if callback.is_callable() {
        Ok(callback)
    } else {
        Err(raise_callback_error!(method))
    }
}

/// `Array.isArray`: true only for objects whose internal class is `Array`.
pub fn is_array(val: &Value) -> bool {
    match val {
        Value::Object(obj) => obj.borrow().class == ObjectClass::Array,
        _ => false,
    }
}

pub fn set_array_length(obj: &JSObjectPtr, new_length: u32) {
    obj_set_key_value(obj, &"length".into(), Value::from(new_length));
}

/// `Array.prototype` reachable from the global object, if one is installed.
pub fn array_prototype(env: &JSObjectPtr) -> Option<JSObjectPtr> {
    let ctor = obj_get_key_value(env, &"Array".into())?;
    let proto = obj_get_key_value(ctor.as_object()?, &"prototype".into())?;
    proto.as_object().cloned()
}

/// A new empty array inheriting from the `Array.prototype` of `env`.
pub fn create_array(env: &JSObjectPtr) -> JSObjectPtr {
    let arr = new_object_with_class(ObjectClass::Array);
    arr.borrow_mut().prototype = array_prototype(env);
    set_array_length(&arr, 0);
    arr
}

/// A dense array holding `values`.
pub fn array_from_values(env: &JSObjectPtr, values: Vec<Value>) -> JSObjectPtr {
    let arr = create_array(env);
    let length = values.len();
    {
        let mut a = arr.borrow_mut();
        for (i, val) in values.into_iter().enumerate() {
            a.insert(PropertyKey::from(i as u32), val);
        }
    }
    set_array_length(&arr, u32::try_from(length).unwrap_or(u32::MAX));
    arr
}

/// An array with the same length and holes as `source`.
pub fn array_from_sparse(env: &JSObjectPtr, source: &SparseArray) -> JSObjectPtr {
    let arr = create_array(env);
    {
        let mut a = arr.borrow_mut();
        for (i, val) in source.iter() {
            a.insert(PropertyKey::from(i), val.clone());
        }
    }
    set_array_length(&arr, source.length());
    arr
}

/// An array with `None` slots left as holes.
pub fn array_from_slots(env: &JSObjectPtr, slots: Vec<Option<Value>>) -> JSObjectPtr {
    array_from_sparse(env, &SparseArray::from(slots))
}

/// Snapshot of an array-like as slots, `None` for holes. Useful for
/// inspecting results from Rust.
pub fn array_to_slots(val: &Value) -> Result<Vec<Option<Value>>, JSError> {
    let obj = to_object(val)?;
    let length = obj.length();
    Ok((0..length).map(|i| obj.has_index(i).then(|| obj.get(i))).collect())
}
