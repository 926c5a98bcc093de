use crate::core::number::to_uint32;
use crate::core::{JSObjectPtr, PropertyKey, Value, obj_get_key_value, obj_has_property, to_number};
use std::collections::BTreeMap;

/// The capabilities the array generics need from a receiver.
///
/// Holes are first class: an index below `length` for which `has_index`
/// is false is skipped by every scan, even though it counts toward the
/// length.
pub trait ArrayLike {
    /// `length`, already coerced with ToUint32.
    fn length(&self) -> u32;

    fn has_index(&self, index: u32) -> bool;

    /// Element at `index`, `undefined` for holes.
    fn get(&self, index: u32) -> Value;
}

/// `ToUint32(obj.length)`, looking `length` up through the prototype chain.
pub fn length_of_array_like(obj: &JSObjectPtr) -> u32 {
    let raw = obj_get_key_value(obj, &"length".into()).unwrap_or_default();
    to_uint32(to_number(&raw))
}

impl ArrayLike for JSObjectPtr {
    fn length(&self) -> u32 {
        length_of_array_like(self)
    }

    fn has_index(&self, index: u32) -> bool {
        obj_has_property(self, &PropertyKey::from(index))
    }

    fn get(&self, index: u32) -> Value {
        obj_get_key_value(self, &PropertyKey::from(index)).unwrap_or_default()
    }
}

impl ArrayLike for [Option<Value>] {
    fn length(&self) -> u32 {
        u32::try_from(self.len()).unwrap_or(u32::MAX)
    }

    fn has_index(&self, index: u32) -> bool {
        matches!(<[Option<Value>]>::get(self, index as usize), Some(Some(_)))
    }

    fn get(&self, index: u32) -> Value {
        match <[Option<Value>]>::get(self, index as usize) {
            Some(Some(val)) => val.clone(),
            _ => Value::Undefined,
        }
    }
}

impl ArrayLike for Vec<Option<Value>> {
    fn length(&self) -> u32 {
        self.as_slice().length()
    }

    fn has_index(&self, index: u32) -> bool {
        self.as_slice().has_index(index)
    }

    fn get(&self, index: u32) -> Value {
        ArrayLike::get(self.as_slice(), index)
    }
}

/// An array-like backed by an ordered map, for sequences that are mostly
/// holes. Also the result type of `map` and `slice`, whose results keep the
/// holes of their source.
#[derive(Clone, Debug, Default)]
pub struct SparseArray {
    elements: BTreeMap<u32, Value>,
    length: u32,
}

impl SparseArray {
    /// A sequence of `length` holes.
    pub fn new(length: u32) -> Self {
        SparseArray {
            elements: BTreeMap::new(),
            length,
        }
    }

    /// Store `val` at `index`, growing `length` past it if needed.
    pub fn set(&mut self, index: u32, val: Value) {
        if index >= self.length {
            self.length = index.saturating_add(1);
        }
        self.elements.insert(index, val);
    }

    /// Number of stored (non-hole) elements.
    pub fn stored(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Value)> {
        self.elements.iter().map(|(i, v)| (*i, v))
    }
}

impl From<Vec<Option<Value>>> for SparseArray {
    fn from(slots: Vec<Option<Value>>) -> Self {
        let length = slots.length();
        let elements = slots
            .into_iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|val| (i as u32, val)))
            .collect();
        SparseArray { elements, length }
    }
}

impl ArrayLike for SparseArray {
    fn length(&self) -> u32 {
        self.length
    }

    fn has_index(&self, index: u32) -> bool {
        self.elements.contains_key(&index)
    }

    fn get(&self, index: u32) -> Value {
        self.elements.get(&index).cloned().unwrap_or_default()
    }
}
