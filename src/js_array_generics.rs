//! The ES5 array algorithms, written once against [`ArrayLike`].
//!
//! Every function reads `length` once up front and then makes a single pass.
//! `has_index` is checked again at each step, so a callback that deletes a
//! later element causes it to be skipped. Callbacks are plain Rust closures;
//! the value-level methods in `js_array` wrap script functions into them.
//!
//! Nothing here borrows the receiver across a callback invocation, so a
//! callback may read, mutate or re-enter any of these functions.

use crate::core::range::{resolve_last_start, resolve_range, resolve_start};
use crate::core::{ArrayLike, SparseArray, Value};
use crate::error::JSError;

/// `indexOf`: first stored index at or after `begin` whose element is
/// strictly equal to `target`, or -1.
pub fn index_of<A: ArrayLike + ?Sized>(elements: &A, target: &Value, begin: Option<&Value>) -> i64 {
    let length = elements.length();
    let start = resolve_start(begin, length);
    (start..length)
        .find(|&index| elements.has_index(index) && elements.get(index).strict_equals(target))
        .map_or(-1, i64::from)
}

/// `lastIndexOf`: like [`index_of`], scanning backward from `begin`.
pub fn last_index_of<A: ArrayLike + ?Sized>(elements: &A, target: &Value, begin: Option<&Value>) -> i64 {
    let Some(start) = resolve_last_start(begin, elements.length()) else {
        return -1;
    };
    (0..=start)
        .rev()
        .find(|&index| elements.has_index(index) && elements.get(index).strict_equals(target))
        .map_or(-1, i64::from)
}

pub fn for_each<A, F>(elements: &A, mut callback: F) -> Result<(), JSError>
where
    A: ArrayLike + ?Sized,
    F: FnMut(Value, u32) -> Result<(), JSError>,
{
    let length = elements.length();
    for index in 0..length {
        if elements.has_index(index) {
            callback(elements.get(index), index)?;
        }
    }
    Ok(())
}

/// `every`: stops at the first element the predicate rejects. Vacuously
/// true when there are no stored elements.
pub fn every<A, F>(elements: &A, mut predicate: F) -> Result<bool, JSError>
where
    A: ArrayLike + ?Sized,
    F: FnMut(Value, u32) -> Result<bool, JSError>,
{
    let length = elements.length();
    for index in 0..length {
        if elements.has_index(index) && !predicate(elements.get(index), index)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `some`: stops at the first element the predicate accepts.
pub fn some<A, F>(elements: &A, mut predicate: F) -> Result<bool, JSError>
where
    A: ArrayLike + ?Sized,
    F: FnMut(Value, u32) -> Result<bool, JSError>,
{
    let length = elements.length();
    for index in 0..length {
        if elements.has_index(index) && predicate(elements.get(index), index)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `filter`: dense result of the elements the predicate accepts, in order.
/// The element kept is the one read before the predicate ran.
pub fn filter<A, F>(elements: &A, mut predicate: F) -> Result<Vec<Value>, JSError>
where
    A: ArrayLike + ?Sized,
    F: FnMut(Value, u32) -> Result<bool, JSError>,
{
    let length = elements.length();
    let mut result = Vec::new();
    for index in 0..length {
        if elements.has_index(index) {
            let element = elements.get(index);
            if predicate(element.clone(), index)? {
                result.push(element);
            }
        }
    }
    Ok(result)
}

/// `map`: same length as the receiver; holes stay holes.
pub fn map<A, F>(elements: &A, mut callback: F) -> Result<SparseArray, JSError>
where
    A: ArrayLike + ?Sized,
    F: FnMut(Value, u32) -> Result<Value, JSError>,
{
    let length = elements.length();
    let mut result = SparseArray::new(length);
    for index in 0..length {
        if elements.has_index(index) {
            result.set(index, callback(elements.get(index), index)?);
        }
    }
    Ok(result)
}

/// `reduce`. `initial` of `None` seeds the accumulator with the first stored
/// element instead; the callback gets `(accumulator, element, index)`.
pub fn reduce<A, F>(elements: &A, initial: Option<Value>, callback: F) -> Result<Value, JSError>
where
    A: ArrayLike + ?Sized,
    F: FnMut(Value, Value, u32) -> Result<Value, JSError>,
{
    let length = elements.length();
    fold(elements, 0..length, initial, callback)
}

/// `reduceRight`: [`reduce`] in descending index order.
pub fn reduce_right<A, F>(elements: &A, initial: Option<Value>, callback: F) -> Result<Value, JSError>
where
    A: ArrayLike + ?Sized,
    F: FnMut(Value, Value, u32) -> Result<Value, JSError>,
{
    let length = elements.length();
    fold(elements, (0..length).rev(), initial, callback)
}

fn fold<A, I, F>(elements: &A, indices: I, initial: Option<Value>, mut callback: F) -> Result<Value, JSError>
where
    A: ArrayLike + ?Sized,
    I: Iterator<Item = u32>,
    F: FnMut(Value, Value, u32) -> Result<Value, JSError>,
{
    let mut accumulator = initial;
    for index in indices {
        if !elements.has_index(index) {
            continue;
        }
        let element = elements.get(index);
        accumulator = Some(match accumulator {
            Some(acc) => callback(acc, element, index)?,
            None => element,
        });
    }
    accumulator.ok_or(JSError::EmptyReductionError)
}

/// `slice`: copy of `[begin, end)`; holes in the range stay holes.
pub fn slice<A: ArrayLike + ?Sized>(elements: &A, begin: Option<&Value>, end: Option<&Value>) -> SparseArray {
    let range = resolve_range(begin, end, elements.length());
    let mut result = SparseArray::new(range.end - range.start);
    for index in range.clone() {
        if elements.has_index(index) {
            result.set(index - range.start, elements.get(index));
        }
    }
    result
}
