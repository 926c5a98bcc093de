//! ECMAScript 5 `Array` generics for runtimes that lack them.
//!
//! `indexOf`, `lastIndexOf`, `forEach`, `every`, `some`, `filter`, `map`,
//! `reduce`, `reduceRight`, `slice` and `isArray` work on any array-like
//! receiver: an object with a `length` and integer-keyed elements, holes
//! included. The algorithms live in [`js_array_generics`] and are generic
//! over [`ArrayLike`]; [`js_array`] runs them over script values, and
//! [`js_shim`] installs them onto a global `Array` without replacing
//! anything that already exists.

pub(crate) mod core;
pub mod error;
pub mod js_array;
pub mod js_array_generics;
pub mod js_console;
pub mod js_function;
#[cfg(feature = "json")]
pub mod js_json;
pub mod js_shim;
pub mod repl_utils;
pub(crate) mod unicode;

pub use crate::core::number::{number_to_string, string_to_number};
pub use crate::core::range::{resolve_last_start, resolve_range};
pub use crate::core::{
    ArrayLike, JSObjectData, JSObjectPtr, ObjectClass, PropertyKey, SparseArray, Value, new_js_object_data, new_object_with_class,
    obj_get_key_value, obj_has_property, obj_set_key_value, to_integer, to_number, to_object, to_uint32, value_to_string,
};
pub use error::JSError;
pub use js_array::{array_from_slots, array_from_values, array_to_slots, create_array, is_array};
pub use js_console::format_value;
pub use js_function::{call_function, call_method, get_argument, make_native_function};
#[cfg(feature = "json")]
pub use js_json::parse_json_value;
pub use js_shim::{InstallReport, call_array_method, call_array_static, get_array_constructor, initialize_array_module, install_array_generics};
pub use repl_utils::{is_complete_input, split_operands};
