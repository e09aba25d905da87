use thiserror::Error;

/// Error returned by [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectCloneError {
    #[error("`reflect_clone` is not supported for `{type_path}`")]
    NotSupported { type_path: &'static str },
}
