//! Value model and the abstract operations the array generics are built on:
//! ToNumber, ToInteger, ToUint32, ToObject and index-range resolution.

mod value;
pub use value::*;

mod property_key;
pub use property_key::*;

pub mod number;
pub use number::{to_integer, to_uint32};

pub mod array_like;
pub use array_like::{ArrayLike, SparseArray};

pub mod range;
