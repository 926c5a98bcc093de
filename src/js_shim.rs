//! Install-if-absent registration of the array generics onto a global
//! object.
//!
//! Every capability is installed only when nothing truthy of the same name
//! is already reachable, so a native implementation always wins. Installed
//! functions hold weak references to the global object and the `Array`
//! constructor, which keeps the object graph free of `Rc` cycles.

use crate::core::{JSObjectPtr, ObjectClass, PropertyKey, Value, new_js_object_data, new_object_with_class, obj_get_key_value};
use crate::error::JSError;
use crate::js_array::{
    ES3_STATIC_METHODS, ES5_METHODS, HOST_METHODS, handle_array_constructor, handle_array_instance_method, is_array, set_array_length,
};
use crate::js_function::{call_function, define_if_absent, get_argument, make_native_function};
use crate::raise_type_error;
use std::rc::{Rc, Weak};

/// What [`install_array_generics`] did, as qualified names such as
/// `Array.prototype.map` or `Array.map`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    /// `Array.prototype.slice` failed on a plain array-like and was replaced.
    pub slice_repaired: bool,
}

impl InstallReport {
    fn record(&mut self, name: String, installed: bool) {
        if installed {
            log::debug!("installed {name}");
            self.installed.push(name);
        } else {
            log::debug!("kept existing {name}");
            self.skipped.push(name);
        }
    }
}

/// Set up `Array` and `Array.prototype` on the global object `env` (keeping
/// whatever already exists), give the prototype the host's ES3 methods, then
/// run [`install_array_generics`].
pub fn initialize_array_module(env: &JSObjectPtr) -> Result<InstallReport, JSError> {
    let env_ref = Rc::downgrade(env);
    let array_ctor = match obj_get_key_value(env, &"Array".into()) {
        Some(Value::Object(ctor)) => ctor,
        _ => {
            let ctor = make_native_function("Array", move |_this, args| handle_array_constructor(args, &upgrade_env(&env_ref)));
            let ctor = ctor.as_object().cloned().ok_or_else(|| raise_type_error!("Array is not an object"))?;
            env.borrow_mut().insert("Array".into(), Value::Object(ctor.clone()));
            ctor
        }
    };

    let proto = match obj_get_key_value(&array_ctor, &"prototype".into()) {
        Some(Value::Object(proto)) => proto,
        _ => {
            // Array.prototype is itself an (empty) array.
            let proto = new_object_with_class(ObjectClass::Array);
            set_array_length(&proto, 0);
            array_ctor.borrow_mut().insert("prototype".into(), Value::Object(proto.clone()));
            proto
        }
    };

    for name in HOST_METHODS {
        let installed = define_if_absent(&proto, name, || native_method(env, name));
        log::debug!("host Array.prototype.{name}: {}", if installed { "native" } else { "pre-existing" });
    }

    install_array_generics(env, &array_ctor)
}

/// Install the ES5 generics onto `array_ctor` and its `prototype`.
///
/// - `Array.prototype.<m>` and the static `Array.<m>` for every ES5 method;
/// - `Array.isArray`;
/// - static forms of the ES3 methods, which forward to whatever
///   `Array.prototype.<m>` is at call time;
/// - finally, if `Array.slice({})` throws, `Array.prototype.slice` is
///   replaced by the generic implementation.
pub fn install_array_generics(env: &JSObjectPtr, array_ctor: &JSObjectPtr) -> Result<InstallReport, JSError> {
    let proto = match obj_get_key_value(array_ctor, &"prototype".into()) {
        Some(Value::Object(proto)) => proto,
        _ => return Err(raise_type_error!("Array.prototype is not an object")),
    };
    let mut report = InstallReport::default();

    for name in ES5_METHODS {
        let installed = define_if_absent(array_ctor, name, || make_static(array_ctor, name));
        report.record(format!("Array.{name}"), installed);
        let installed = define_if_absent(&proto, name, || native_method(env, name));
        report.record(format!("Array.prototype.{name}"), installed);
    }

    let installed = define_if_absent(array_ctor, "isArray", || {
        make_native_function("isArray", |_this, args| Ok(Value::Boolean(is_array(&get_argument(args, 0)))))
    });
    report.record("Array.isArray".to_string(), installed);

    for name in ES3_STATIC_METHODS {
        let installed = define_if_absent(array_ctor, name, || make_static(array_ctor, name));
        report.record(format!("Array.{name}"), installed);
    }

    report.slice_repaired = repair_slice(env, array_ctor, &proto);
    Ok(report)
}

/// Some hosts ship a `slice` that only accepts true arrays. Probe it with a
/// plain object and swap in the generic one when it throws.
fn repair_slice(env: &JSObjectPtr, array_ctor: &JSObjectPtr, proto: &JSObjectPtr) -> bool {
    let probe = Value::Object(new_js_object_data());
    let static_slice = obj_get_key_value(array_ctor, &"slice".into()).unwrap_or_default();
    match call_function(&static_slice, &Value::Object(array_ctor.clone()), &[probe]) {
        Ok(_) => false,
        Err(e) => {
            log::debug!("Array.slice on an array-like failed ({e}); replacing Array.prototype.slice");
            proto.borrow_mut().insert("slice".into(), native_method(env, "slice"));
            true
        }
    }
}

/// Global `Array` constructor of `env`.
pub fn get_array_constructor(env: &JSObjectPtr) -> Result<JSObjectPtr, JSError> {
    match obj_get_key_value(env, &"Array".into()) {
        Some(Value::Object(ctor)) => Ok(ctor),
        _ => Err(raise_type_error!("Array is not defined")),
    }
}

/// `Array.prototype[name].call(this, ...args)` against the global `env`:
/// the generic call path that works on any array-like receiver.
pub fn call_array_method(env: &JSObjectPtr, this: &Value, name: &str, args: &[Value]) -> Result<Value, JSError> {
    let ctor = get_array_constructor(env)?;
    let proto = obj_get_key_value(&ctor, &"prototype".into()).unwrap_or_default();
    let method = match &proto {
        Value::Object(p) => obj_get_key_value(p, &PropertyKey::from(name)).unwrap_or_default(),
        _ => Value::Undefined,
    };
    if !method.is_callable() {
        return Err(raise_type_error!(format!("Array.prototype.{name} is not a function")));
    }
    call_function(&method, this, args)
}

/// `Array.<name>(receiver, ...args)`.
pub fn call_array_static(env: &JSObjectPtr, name: &str, args: &[Value]) -> Result<Value, JSError> {
    let ctor = get_array_constructor(env)?;
    let method = obj_get_key_value(&ctor, &PropertyKey::from(name)).unwrap_or_default();
    if !method.is_callable() {
        return Err(raise_type_error!(format!("Array.{name} is not a function")));
    }
    call_function(&method, &Value::Object(ctor), args)
}

fn upgrade_env(env: &Weak<std::cell::RefCell<crate::core::JSObjectData>>) -> JSObjectPtr {
    // A function outliving its realm still works; its results just have no
    // prototype.
    env.upgrade().unwrap_or_else(new_js_object_data)
}

/// A prototype method backed by the generic implementation.
fn native_method(env: &JSObjectPtr, name: &'static str) -> Value {
    let env_ref = Rc::downgrade(env);
    make_native_function(name, move |this, args| handle_array_instance_method(this, name, args, &upgrade_env(&env_ref)))
}

/// Static form: `Array.<name>(receiver, ...rest)` forwards to the current
/// `Array.prototype.<name>` with `receiver` as `this`.
fn make_static(array_ctor: &JSObjectPtr, name: &'static str) -> Value {
    let ctor_ref = Rc::downgrade(array_ctor);
    make_native_function(name, move |_this, args| {
        log::trace!("Array.{name} -> Array.prototype.{name}");
        let method = ctor_ref
            .upgrade()
            .and_then(|ctor| obj_get_key_value(&ctor, &"prototype".into()))
            .and_then(|proto| proto.as_object().and_then(|p| obj_get_key_value(p, &PropertyKey::from(name))))
            .unwrap_or_default();
        if !method.is_callable() {
            return Err(raise_type_error!(format!("Array.prototype.{name} is not a function")));
        }
        let receiver = get_argument(args, 0);
        call_function(&method, &receiver, args.get(1..).unwrap_or_default())
    })
}
