//! Building blocks for reflection impls, and the impls of built-in types.
//!
//! - [`concat`]: string concatenation for composed type paths.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]:
//!   static storage used by [`Typed`](crate::info::Typed) and
//!   [`TypePath`](crate::info::TypePath) impls.
//! - [`object_debug`], [`object_partial_eq`]: member-wise fallbacks used by
//!   `#[derive(Reflect)]` when `debug` / `partial_eq` are not declared.
//!
//! Built-in opaque types: `()`, `bool`, `char`, `i8`-`i128`, `isize`,
//! `u8`-`u128`, `usize`, `f32`, `f64`, `String`, `&'static str`,
//! `Option<T>` and `Vec<T>`.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod object;
mod option;
mod primitives;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use object::{object_debug, object_partial_eq};

/// Concatenates string slices with a single allocation.
///
/// ```
/// let s = mb_reflect::impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
