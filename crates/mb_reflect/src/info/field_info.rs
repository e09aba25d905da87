use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::access::BindError;
use crate::info::{CustomAttributes, Type, TypeInfo, Typed, Visibility};
use crate::info::{impl_custom_attributes_fn, impl_type_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// FieldAccess

/// Type-erased projection from an owner value to one of its fields.
pub(crate) trait FieldAccess: Send + Sync + 'static {
    fn get<'a>(&self, target: &'a dyn Reflect) -> Option<&'a dyn Reflect>;
    fn get_mut<'a>(&self, target: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect>;
}

pub(crate) struct TypedField<S, T> {
    get: fn(&S) -> &T,
    get_mut: fn(&mut S) -> &mut T,
}

impl<S: Reflect, T: Reflect> TypedField<S, T> {
    #[inline]
    pub(crate) const fn new(get: fn(&S) -> &T, get_mut: fn(&mut S) -> &mut T) -> Self {
        Self { get, get_mut }
    }
}

impl<S: Reflect, T: Reflect> FieldAccess for TypedField<S, T> {
    #[inline]
    fn get<'a>(&self, target: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        let target = target.downcast_ref::<S>()?;
        Some((self.get)(target))
    }

    #[inline]
    fn get_mut<'a>(&self, target: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        let target = target.downcast_mut::<S>()?;
        Some((self.get_mut)(target))
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// A named field of a type.
///
/// ```
/// use mb_reflect::{derive::Reflect, info::{Typed, Visibility}};
///
/// #[derive(Reflect)]
/// pub struct Order {
///     pub quantity: u32,
///     #[reflect(readonly)]
///     pub id: u64,
///     note: String,
/// }
///
/// let info = Order::type_info().as_object().unwrap();
///
/// let quantity = info.field("quantity").unwrap();
/// assert!(quantity.type_is::<u32>());
/// assert_eq!(quantity.visibility(), Visibility::Public);
///
/// assert!(info.field("id").unwrap().is_readonly());
/// assert_eq!(info.field("note").unwrap().visibility(), Visibility::Private);
/// ```
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    owner: Type,
    ty: Type,
    // `TypeInfo` is created on first access; the function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    visibility: Visibility,
    readonly: bool,
    access: Arc<dyn FieldAccess>,
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl FieldInfo {
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a public, writable field of `S` with value type `T`.
    pub fn new<S, T>(
        name: &'static str,
        get: fn(&S) -> &T,
        get_mut: fn(&mut S) -> &mut T,
    ) -> Self
    where
        S: Reflect + Typed,
        T: Reflect + Typed,
    {
        Self {
            name,
            owner: Type::of::<S>(),
            ty: Type::of::<T>(),
            type_info: T::type_info,
            visibility: Visibility::Public,
            readonly: false,
            access: Arc::new(TypedField::new(get, get_mut)),
            custom_attributes: None,
        }
    }

    #[inline]
    pub fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    /// Marks the field as assignable only during initialization.
    #[inline]
    pub fn with_readonly(self, readonly: bool) -> Self {
        Self { readonly, ..self }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The type declaring this field.
    #[inline]
    pub const fn owner(&self) -> &Type {
        &self.owner
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Borrows the field of `target`.
    pub fn get<'a>(&self, target: &'a dyn Reflect) -> Result<&'a dyn Reflect, BindError> {
        self.access
            .get(target)
            .ok_or_else(|| self.invalid_target(target.reflect_type_path()))
    }

    /// Mutably borrows the field of `target`.
    ///
    /// This is raw access and does not consult [`is_readonly`](Self::is_readonly).
    pub fn get_mut<'a>(
        &self,
        target: &'a mut dyn Reflect,
    ) -> Result<&'a mut dyn Reflect, BindError> {
        let actual = target.reflect_type_path();
        self.access
            .get_mut(target)
            .ok_or_else(|| self.invalid_target(actual))
    }

    /// Assigns `value` to the field of `target`.
    ///
    /// Fails with [`BindError::NotWritable`] on read-only fields and with
    /// [`BindError::TypeMismatch`] if `value` is not of the field's type, in
    /// which case the field keeps its old value.
    pub fn set(&self, target: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), BindError> {
        let actual = target.reflect_type_path();
        if target.ty_id() != self.owner.id() {
            return Err(self.invalid_target(actual));
        }
        if self.readonly {
            return Err(BindError::NotWritable { member: self.name });
        }
        self.get_mut(target)?
            .set(value)
            .map_err(|value| BindError::TypeMismatch {
                member: self.name,
                expected: self.ty.path(),
                actual: value.reflect_type_path(),
            })
    }

    fn invalid_target(&self, actual: &'static str) -> BindError {
        BindError::InvalidTarget {
            member: self.name,
            expected: self.owner.path(),
            actual,
        }
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("ty", &self.ty)
            .field("visibility", &self.visibility)
            .field("readonly", &self.readonly)
            .field("custom_attributes", self.custom_attributes())
            .finish()
    }
}
