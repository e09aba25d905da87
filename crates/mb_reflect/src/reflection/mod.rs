// -----------------------------------------------------------------------------
// Modules

mod clone_error;
mod reflect;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use reflect::impl_reflect_set_fn;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;
pub use reflect::Reflect;
