use crate::core::number::number_to_string;
use crate::core::{ArrayLike, JSObjectData, ObjectClass, Value};
use crate::unicode::utf16_to_utf8;
use std::cell::RefCell;
use std::rc::Rc;

/// Render a value as a JavaScript literal.
///
/// Arrays print with elisions for holes (`[1,,3]`, and `[,,]` for
/// `new Array(2)`), strings are double-quoted, other objects print their
/// own properties in insertion order. Cycles print as `[Circular]`.
pub fn format_value(val: &Value) -> String {
    let mut seen = Vec::new();
    format_guarded(val, &mut seen)
}

fn format_guarded(val: &Value, seen: &mut Vec<*const RefCell<JSObjectData>>) -> String {
    match val {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => quote(&utf16_to_utf8(s)),
        Value::Object(obj) => {
            let ptr = Rc::as_ptr(obj);
            if seen.contains(&ptr) {
                return "[Circular]".to_string();
            }
            let (class, primitive, native_name) = {
                let o = obj.borrow();
                (o.class.clone(), o.primitive.clone(), o.native().map(|f| f.name.clone()))
            };
            if let Some(name) = native_name {
                return format!("[Function: {name}]");
            }
            if let Some(p) = primitive {
                return format!("[{}: {}]", class.tag(), format_guarded(&p, seen));
            }

            seen.push(ptr);
            let s = if class == ObjectClass::Array {
                let length = obj.length();
                let mut s = String::from("[");
                for i in 0..length {
                    if i > 0 {
                        s.push(',');
                    }
                    if obj.has_index(i) {
                        s.push_str(&format_guarded(&obj.get(i), seen));
                    }
                }
                // A trailing hole needs its own comma to keep the length.
                if length > 0 && !obj.has_index(length - 1) {
                    s.push(',');
                }
                s.push(']');
                s
            } else {
                let entries: Vec<(String, Value)> = obj.borrow().properties.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
                let body = entries
                    .iter()
                    .map(|(k, v)| format!("{}:{}", quote(k), format_guarded(v, seen)))
                    .collect::<Vec<_>>()
                    .join(",");
                match class {
                    ObjectClass::Object => format!("{{{body}}}"),
                    other => format!("{} {{{body}}}", other.tag()),
                }
            };
            seen.pop();
            s
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
