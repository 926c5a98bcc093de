use crate::core::{JSObjectPtr, NativeFn, ObjectClass, PropertyKey, Value, new_object_with_class, obj_get_key_value, to_object, value_to_string};
use crate::error::JSError;
use crate::raise_type_error;
use std::rc::Rc;

/// Wrap a Rust closure as a callable function object.
pub fn make_native_function<F>(name: &str, body: F) -> Value
where
    F: Fn(&Value, &[Value]) -> Result<Value, JSError> + 'static,
{
    let func = new_object_with_class(ObjectClass::Function);
    let body: NativeFn = Rc::new(body);
    {
        let mut f = func.borrow_mut();
        f.set_native(name, body);
        f.insert("name".into(), Value::from(name));
    }
    Value::Object(func)
}

/// `arguments[index]`, `undefined` past the end.
pub fn get_argument(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or_default()
}

/// `[[Call]]`. The function body is cloned out before the call so no borrow of
/// the function object is held while it runs.
pub fn call_function(func: &Value, this: &Value, args: &[Value]) -> Result<Value, JSError> {
    let body = match func {
        Value::Object(obj) => obj.borrow().native().map(|f| f.body.clone()),
        _ => None,
    };
    match body {
        Some(body) => body(this, args),
        None => Err(raise_type_error!(format!("{} is not a function", value_to_string(func)))),
    }
}

/// `receiver[name](...args)`: the method is looked up through the prototype
/// chain of `ToObject(receiver)` and called with `receiver` itself as
/// `this`.
pub fn call_method(receiver: &Value, name: &str, args: &[Value]) -> Result<Value, JSError> {
    let obj = to_object(receiver)?;
    let method = obj_get_key_value(&obj, &PropertyKey::from(name)).unwrap_or_default();
    if !method.is_callable() {
        return Err(raise_type_error!(format!("{name} is not a function")));
    }
    log::trace!("call_method: {name} with {} args", args.len());
    call_function(&method, receiver, args)
}

/// Install `value` as `obj[name]` unless a truthy property of that name is
/// already reachable. Returns whether it was installed.
pub fn define_if_absent(obj: &JSObjectPtr, name: &str, value: impl FnOnce() -> Value) -> bool {
    let key = PropertyKey::from(name);
    if obj_get_key_value(obj, &key).is_some_and(|existing| existing.to_boolean()) {
        return false;
    }
    obj.borrow_mut().insert(key, value());
    true
}
