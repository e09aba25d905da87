use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::info::{FieldAccess, Type, TypeInfo, Typed, TypedField, impl_type_fn};

/// The base of an object: an embedded value whose members the object
/// inherits, marked `#[reflect(base)]`.
///
/// Only single inheritance is modelled; a base may have a base of its own.
#[derive(Clone)]
pub struct BaseInfo {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    access: Arc<dyn FieldAccess>,
}

impl BaseInfo {
    impl_type_fn!(ty);

    /// `name` is the name of the embedding field in `S`.
    pub fn new<S, B>(name: &'static str, get: fn(&S) -> &B, get_mut: fn(&mut S) -> &mut B) -> Self
    where
        S: Reflect + Typed,
        B: Reflect + Typed,
    {
        Self {
            name,
            ty: Type::of::<B>(),
            type_info: B::type_info,
            access: Arc::new(TypedField::new(get, get_mut)),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The [`TypeInfo`] of the base type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Projects a value of the derived type onto its base.
    ///
    /// Returns `None` if `target` is not of the derived type.
    #[inline]
    pub fn get<'a>(&self, target: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        self.access.get(target)
    }

    #[inline]
    pub fn get_mut<'a>(&self, target: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        self.access.get_mut(target)
    }
}

impl fmt::Debug for BaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .finish()
    }
}
