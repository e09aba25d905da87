use thiserror::Error;

use crate::info::MemberKind;

/// Error returned by [`BindableMember`](super::BindableMember) and by the
/// checked accessors of [`PropertyInfo`](crate::info::PropertyInfo) and
/// [`FieldInfo`](crate::info::FieldInfo).
///
/// Type names are reported as type paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindError {
    #[error("cannot create an accessor without a {kind} descriptor")]
    InvalidArgument { kind: MemberKind },

    #[error("member `{member}` belongs to `{expected}`, but the target is `{actual}`")]
    InvalidTarget {
        member: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("member `{member}` has type `{expected}`, but the value is `{actual}`")]
    TypeMismatch {
        member: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("member `{member}` cannot be read")]
    NotReadable { member: &'static str },

    #[error("member `{member}` cannot be written")]
    NotWritable { member: &'static str },

    #[error("indexer `{member}` takes {expected} index argument(s), {actual} given")]
    IndexArity {
        member: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("index argument {position} of `{member}` has type `{expected}`, but `{actual}` was given")]
    IndexMismatch {
        member: &'static str,
        position: usize,
        expected: &'static str,
        actual: &'static str,
    },
}
