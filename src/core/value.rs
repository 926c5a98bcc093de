use crate::core::PropertyKey;
use crate::core::array_like::length_of_array_like;
use crate::core::number::{number_to_string, string_to_number};
use crate::error::JSError;
use crate::unicode::{utf8_to_utf16, utf16_to_utf8};
use std::cell::RefCell;
use std::rc::Rc;

pub type JSObjectPtr = Rc<RefCell<JSObjectData>>;

/// Body of a native function: `(this, arguments) -> result`.
pub type NativeFn = Rc<dyn Fn(&Value, &[Value]) -> Result<Value, JSError>>;

/// Internal `[[Class]]` of an object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ObjectClass {
    #[default]
    Object,
    Array,
    Function,
    String,
    Number,
    Boolean,
    Arguments,
    /// Objects supplied by the embedder, e.g. a DOM `NodeList`.
    Host(String),
}

impl ObjectClass {
    pub fn tag(&self) -> &str {
        match self {
            ObjectClass::Object => "Object",
            ObjectClass::Array => "Array",
            ObjectClass::Function => "Function",
            ObjectClass::String => "String",
            ObjectClass::Number => "Number",
            ObjectClass::Boolean => "Boolean",
            ObjectClass::Arguments => "Arguments",
            ObjectClass::Host(name) => name,
        }
    }
}

#[derive(Clone)]
pub struct NativeFunction {
    pub name: String,
    pub body: NativeFn,
}

#[derive(Clone, Default)]
pub struct JSObjectData {
    pub class: ObjectClass,
    pub properties: indexmap::IndexMap<PropertyKey, Value>,
    pub prototype: Option<JSObjectPtr>,
    /// `[[PrimitiveValue]]` of boxed booleans, numbers and strings
    pub primitive: Option<Value>,
    native: Option<NativeFunction>,
}

impl JSObjectData {
    pub fn new() -> Self {
        JSObjectData::default()
    }

    pub fn with_class(class: ObjectClass) -> Self {
        JSObjectData {
            class,
            ..JSObjectData::default()
        }
    }

    pub fn insert(&mut self, key: PropertyKey, val: Value) {
        self.properties.insert(key, val);
    }

    pub fn remove(&mut self, key: &PropertyKey) -> Option<Value> {
        self.properties.shift_remove(key)
    }

    /// Own property lookup. Boxed strings expose their code units and
    /// `length` as read-only own properties.
    pub fn get_own(&self, key: &PropertyKey) -> Option<Value> {
        if let Some(Value::String(s)) = &self.primitive {
            match key {
                PropertyKey::Index(i) => {
                    if let Some(unit) = crate::unicode::utf16_char_at(s, *i as usize) {
                        return Some(Value::String(vec![unit]));
                    }
                }
                PropertyKey::String(name) if name == "length" => return Some(Value::Number(s.len() as f64)),
                _ => {}
            }
        }
        self.properties.get(key).cloned()
    }

    pub fn has_own(&self, key: &PropertyKey) -> bool {
        if let Some(Value::String(s)) = &self.primitive {
            match key {
                PropertyKey::Index(i) if (*i as usize) < s.len() => return true,
                PropertyKey::String(name) if name == "length" => return true,
                _ => {}
            }
        }
        self.properties.contains_key(key)
    }

    pub fn native(&self) -> Option<&NativeFunction> {
        self.native.as_ref()
    }

    pub fn set_native(&mut self, name: &str, body: NativeFn) {
        self.class = ObjectClass::Function;
        self.native = Some(NativeFunction { name: name.to_string(), body });
    }
}

#[inline]
pub fn new_js_object_data() -> JSObjectPtr {
    Rc::new(RefCell::new(JSObjectData::new()))
}

#[inline]
pub fn new_object_with_class(class: ObjectClass) -> JSObjectPtr {
    Rc::new(RefCell::new(JSObjectData::with_class(class)))
}

/// `[[Get]]`: own property first, then the prototype chain.
pub fn obj_get_key_value(obj: &JSObjectPtr, key: &PropertyKey) -> Option<Value> {
    let mut current = Some(obj.clone());
    while let Some(o) = current {
        let borrowed = o.borrow();
        if let Some(val) = borrowed.get_own(key) {
            return Some(val);
        }
        current = borrowed.prototype.clone();
    }
    None
}

/// `[[HasProperty]]`, i.e. the `in` operator.
pub fn obj_has_property(obj: &JSObjectPtr, key: &PropertyKey) -> bool {
    let mut current = Some(obj.clone());
    while let Some(o) = current {
        let borrowed = o.borrow();
        if borrowed.has_own(key) {
            return true;
        }
        current = borrowed.prototype.clone();
    }
    false
}

pub fn obj_set_key_value(obj: &JSObjectPtr, key: &PropertyKey, val: Value) {
    obj.borrow_mut().insert(key.clone(), val);
}

#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(Vec<u16>),
    Object(JSObjectPtr),
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Number(n) => write!(f, "Number({})", number_to_string(*n)),
            Value::String(s) => write!(f, "String({:?})", utf16_to_utf8(s)),
            Value::Object(obj) => match obj.try_borrow() {
                Ok(o) => match o.native() {
                    Some(func) => write!(f, "Function({})", func.name),
                    None => write!(f, "Object([object {}], {:p})", o.class.tag(), Rc::as_ptr(obj)),
                },
                Err(_) => write!(f, "Object({:p})", Rc::as_ptr(obj)),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(utf8_to_utf16(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(utf8_to_utf16(&s))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<JSObjectPtr> for Value {
    fn from(obj: JSObjectPtr) -> Self {
        Value::Object(obj)
    }
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_callable(&self) -> bool {
        match self {
            Value::Object(obj) => obj.borrow().native().is_some(),
            _ => false,
        }
    }

    pub fn as_object(&self) -> Option<&JSObjectPtr> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// ToBoolean
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Object(_) => true,
        }
    }

    /// Strict equality (`===`)
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            // NaN !== NaN, +0 === -0
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// ToNumber
pub fn to_number(val: &Value) -> f64 {
    match val {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(&utf16_to_utf8(s)),
        Value::Object(obj) => {
            let primitive = obj.borrow().primitive.clone();
            match primitive {
                Some(p) => to_number(&p),
                None => string_to_number(&value_to_string(val)),
            }
        }
    }
}

/// ToString. Objects use the default conversions of the built-in
/// prototypes: arrays join their elements with `,`, boxed primitives
/// unwrap, functions print as native code and everything else is
/// `[object <Class>]`.
pub fn value_to_string(val: &Value) -> String {
    let mut seen = Vec::new();
    to_string_guarded(val, &mut seen)
}

fn to_string_guarded(val: &Value, seen: &mut Vec<*const RefCell<JSObjectData>>) -> String {
    match val {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => utf16_to_utf8(s),
        Value::Object(obj) => {
            let (class, primitive, native_name) = {
                let o = obj.borrow();
                (o.class.clone(), o.primitive.clone(), o.native().map(|f| f.name.clone()))
            };
            if let Some(p) = primitive {
                return to_string_guarded(&p, seen);
            }
            if let Some(name) = native_name {
                return format!("function {name}() {{ [native code] }}");
            }
            if class != ObjectClass::Array {
                return format!("[object {}]", class.tag());
            }
            // A self-referencing array joins as an empty string.
            let ptr = Rc::as_ptr(obj);
            if seen.contains(&ptr) {
                return String::new();
            }
            seen.push(ptr);
            let joined = join_guarded(obj, ",", seen);
            seen.pop();
            joined
        }
    }
}

/// `Array.prototype.join` core: `undefined`/`null` elements and holes join as
/// empty strings.
pub fn join_elements(obj: &JSObjectPtr, separator: &str) -> String {
    let mut seen = vec![Rc::as_ptr(obj)];
    join_guarded(obj, separator, &mut seen)
}

fn join_guarded(obj: &JSObjectPtr, separator: &str, seen: &mut Vec<*const RefCell<JSObjectData>>) -> String {
    let length = length_of_array_like(obj);
    let mut result = String::new();
    for i in 0..length {
        if i > 0 {
            result.push_str(separator);
        }
        match obj_get_key_value(obj, &PropertyKey::from(i)) {
            None | Some(Value::Undefined) | Some(Value::Null) => {}
            Some(element) => result.push_str(&to_string_guarded(&element, seen)),
        }
    }
    result
}

/// ToObject. `undefined` and `null` cannot be converted; primitives are
/// boxed into a fresh wrapper object, objects pass through by identity.
pub fn to_object(val: &Value) -> Result<JSObjectPtr, JSError> {
    let class = match val {
        Value::Undefined => return Err(JSError::TypeConversionError { value: "undefined" }),
        Value::Null => return Err(JSError::TypeConversionError { value: "null" }),
        Value::Object(obj) => return Ok(obj.clone()),
        Value::Boolean(_) => ObjectClass::Boolean,
        Value::Number(_) => ObjectClass::Number,
        Value::String(_) => ObjectClass::String,
    };
    let boxed = new_object_with_class(class);
    boxed.borrow_mut().primitive = Some(val.clone());
    Ok(boxed)
}
