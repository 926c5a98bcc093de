//! Index-range resolution shared by `slice`, `indexOf` and `lastIndexOf`.
//!
//! Relative indices are integers as produced by ToInteger: negative values
//! count from the end, infinities are clamped here. An argument that is
//! absent or `undefined` is treated as omitted.

use crate::core::number::to_integer;
use crate::core::{Value, to_number};
use std::ops::Range;

/// `ToInteger(ToNumber(arg))`, or `None` when the argument is omitted.
pub fn integer_argument(arg: Option<&Value>) -> Option<f64> {
    match arg {
        None | Some(Value::Undefined) => None,
        Some(val) => Some(to_integer(to_number(val))),
    }
}

/// Clamp a relative index into `[0, length]`.
pub fn relative_index(relative: f64, length: u32) -> u32 {
    let len = length as f64;
    let index = if relative < 0.0 { (len + relative).max(0.0) } else { relative.min(len) };
    index as u32
}

/// Start of a forward scan; defaults to 0.
pub fn resolve_start(begin: Option<&Value>, length: u32) -> u32 {
    integer_argument(begin).map_or(0, |begin| relative_index(begin, length))
}

/// Exclusive end of a forward scan; defaults to `length`.
pub fn resolve_end(end: Option<&Value>, length: u32) -> u32 {
    integer_argument(end).map_or(length, |end| relative_index(end, length))
}

/// `[start, end)` for `slice`. An end before the start yields an empty range.
pub fn resolve_range(begin: Option<&Value>, end: Option<&Value>, length: u32) -> Range<u32> {
    let start = resolve_start(begin, length);
    let end = resolve_end(end, length);
    start..end.max(start)
}

/// First index visited by a backward scan, defaulting to `length - 1`.
/// `None` when there is nothing to visit: an empty receiver, or a negative
/// start that reaches before the first element.
pub fn resolve_last_start(begin: Option<&Value>, length: u32) -> Option<u32> {
    let last = length.checked_sub(1)?;
    match integer_argument(begin) {
        None => Some(last),
        Some(begin) if begin < 0.0 => {
            let index = length as f64 + begin;
            if index < 0.0 { None } else { Some(index as u32) }
        }
        Some(begin) => Some(begin.min(last as f64) as u32),
    }
}
